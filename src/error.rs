//! Error types for qrprompt operations

use thiserror::Error;

/// Result type alias using qrprompt's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrprompt operations
///
/// Every variant ends up in the same top-level handler; the variants only
/// exist so the `Display` text names the underlying cause.
#[derive(Error, Debug)]
pub enum Error {
    /// Color specification could not be resolved
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown error correction level
    #[error("Invalid error correction level '{0}', expected one of L, M, Q, H")]
    InvalidLevel(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream ended before every prompt was answered
    #[error("Input closed before all questions were answered")]
    InputClosed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_names_spec() {
        let err = Error::InvalidColor("notacolor".to_string());
        assert_eq!(err.to_string(), "Invalid color: notacolor");
    }

    #[test]
    fn test_capacity_error_converts() {
        let err: Error = qrcode::types::QrError::DataTooLong.into();
        assert!(matches!(err, Error::QrEncode(_)));
        assert!(err.to_string().starts_with("Failed to encode QR code"));
    }
}
