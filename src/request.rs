//! The generation request gathered from the operator

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Default foreground (dark module) color
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Default background (light module) color
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// QR redundancy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% of codewords recoverable
    L,
    /// ~15% of codewords recoverable
    #[default]
    M,
    /// ~25% of codewords recoverable
    Q,
    /// ~30% of codewords recoverable
    H,
}

impl ErrorCorrection {
    /// All levels in prompt order
    pub const ALL: [ErrorCorrection; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Single-letter label
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(Error::InvalidLevel(value.to_string())),
        }
    }
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Everything needed to produce one QR code file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Text to encode, as typed
    pub payload: String,
    /// Error correction level for the saved image
    pub ec_level: ErrorCorrection,
    /// Color spec for dark modules
    pub foreground: String,
    /// Color spec for light modules and the quiet zone
    pub background: String,
    /// Print a terminal preview before saving
    pub preview: bool,
}

impl QrRequest {
    /// Request for `payload` with every other field at its default.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Default::default()
        }
    }
}

impl Default for QrRequest {
    fn default() -> Self {
        Self {
            payload: String::new(),
            ec_level: ErrorCorrection::default(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            preview: false,
        }
    }
}
