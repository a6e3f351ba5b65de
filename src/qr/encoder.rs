//! QR code encoder

use crate::error::Result;
use crate::qr::Palette;
use crate::request::ErrorCorrection;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::QrCode;
use std::io::Cursor;

/// Pixels per module edge in saved images
pub const MODULE_PIXELS: u32 = 4;

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ecc_level: ErrorCorrection,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            ecc_level: ErrorCorrection::M,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: ErrorCorrection) -> Self {
        Self { ecc_level }
    }

    /// Build the QR symbol for `payload`.
    ///
    /// Fails when the payload exceeds the capacity of the largest symbol at
    /// this encoder's error correction level.
    pub fn encode(&self, payload: &str) -> Result<QrCode> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ecc_level.into())?;
        tracing::debug!(
            version = ?code.version(),
            width = code.width(),
            ecc_level = %self.ecc_level,
            "Encoded QR symbol"
        );
        Ok(code)
    }

    /// Rasterize `payload` with a four-module quiet zone.
    pub fn render(&self, payload: &str, palette: Palette) -> Result<RgbaImage> {
        let code = self.encode(payload)?;

        let image = code
            .render::<Rgba<u8>>()
            .dark_color(palette.dark)
            .light_color(palette.light)
            .quiet_zone(true)
            .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
            .build();

        Ok(image)
    }

    /// Rasterize `payload` and encode the result as PNG bytes.
    pub fn render_png(&self, payload: &str, palette: Palette) -> Result<Vec<u8>> {
        let image = self.render(payload, palette)?;

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
