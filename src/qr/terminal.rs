//! Compact terminal preview

use crate::error::Result;
use qrcode::render::unicode::Dense1x2;
use qrcode::{EcLevel, QrCode};

/// Render `payload` as half-block terminal art.
///
/// Always uses level L and ignores the requested colors. Light modules are
/// drawn as filled cells so the symbol reads on dark terminal backgrounds.
pub fn render_preview(payload: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;

    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_packs_two_rows_per_line() {
        let payload = "Hello, World!";
        let art = render_preview(payload).unwrap();
        let width = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .unwrap()
            .width();

        let rows = width + 8;
        assert_eq!(art.lines().count(), rows.div_ceil(2));
        assert!(art.lines().all(|line| line.chars().count() == rows));
        assert!(art.contains('\u{2588}'));
    }

    #[test]
    fn test_preview_ignores_saved_level() {
        // 2953 bytes only fit at level L.
        let payload = "x".repeat(2900);
        assert!(render_preview(&payload).is_ok());
    }
}
