//! Color specification parsing
//!
//! Accepts hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, leading `#`
//! optional) and the CSS basic color keywords.

use crate::error::{Error, Result};
use image::Rgba;

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0x00, 0x00, 0x00, 0xFF]),
    ("white", [0xFF, 0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00, 0xFF]),
    ("green", [0x00, 0x80, 0x00, 0xFF]),
    ("blue", [0x00, 0x00, 0xFF, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00, 0xFF]),
    ("cyan", [0x00, 0xFF, 0xFF, 0xFF]),
    ("aqua", [0x00, 0xFF, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF, 0xFF]),
    ("fuchsia", [0xFF, 0x00, 0xFF, 0xFF]),
    ("gray", [0x80, 0x80, 0x80, 0xFF]),
    ("grey", [0x80, 0x80, 0x80, 0xFF]),
    ("silver", [0xC0, 0xC0, 0xC0, 0xFF]),
    ("maroon", [0x80, 0x00, 0x00, 0xFF]),
    ("olive", [0x80, 0x80, 0x00, 0xFF]),
    ("lime", [0x00, 0xFF, 0x00, 0xFF]),
    ("teal", [0x00, 0x80, 0x80, 0xFF]),
    ("navy", [0x00, 0x00, 0x80, 0xFF]),
    ("purple", [0x80, 0x00, 0x80, 0xFF]),
    ("orange", [0xFF, 0xA5, 0x00, 0xFF]),
    ("transparent", [0x00, 0x00, 0x00, 0x00]),
];

/// Resolve a color spec to an RGBA pixel.
pub fn parse_color(spec: &str) -> Result<Rgba<u8>> {
    let trimmed = spec.trim();
    let invalid = || Error::InvalidColor(spec.to_string());

    if let Some((_, rgba)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(Rgba(*rgba));
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // Short forms double each digit: "f80" -> "ff8800".
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let mut channels = [0xFF_u8; 4];
    for (i, channel) in channels.iter_mut().enumerate().take(expanded.len() / 2) {
        *channel = u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }

    Ok(Rgba(channels))
}
