//! QR code rendering
//!
//! This module turns payload text into either a colored raster image for
//! saving or compact half-block art for a terminal preview.

pub mod color;
mod encoder;
mod terminal;

pub use color::parse_color;
pub use encoder::{MODULE_PIXELS, QrEncoder};
pub use terminal::render_preview;

use crate::error::Result;
use image::Rgba;

/// Resolved module colors for a saved image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Dark module color
    pub dark: Rgba<u8>,
    /// Light module and quiet zone color
    pub light: Rgba<u8>,
}

impl Palette {
    /// Resolve a foreground/background spec pair.
    pub fn parse(foreground: &str, background: &str) -> Result<Self> {
        Ok(Self {
            dark: parse_color(foreground)?,
            light: parse_color(background)?,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: Rgba([0x00, 0x00, 0x00, 0xFF]),
            light: Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
        }
    }
}
