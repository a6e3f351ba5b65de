//! One interactive generation session
//!
//! Collect a request, optionally preview it, write the PNG and report the
//! outcome. Every failure ends up in [`report`]; nothing is retried.

use crate::config::AppConfig;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::qr::{Palette, QrEncoder, render_preview};
use crate::request::QrRequest;
use crate::sanitize::sanitize_file_name;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// A successfully written QR code image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCode {
    /// File name relative to the output directory, `.png` included
    pub file_name: String,
    /// Location of the written file
    pub path: PathBuf,
}

/// Prompt for a request and generate its image.
pub async fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<SavedCode> {
    let request = prompter.collect_request()?;
    generate(config, &request, prompter.output()).await
}

/// Generate the image for an already collected request.
///
/// The preview, when requested, is written to `console` before anything
/// touches the filesystem. An existing file with the same name is replaced.
pub async fn generate<W: Write>(
    config: &AppConfig,
    request: &QrRequest,
    console: &mut W,
) -> Result<SavedCode> {
    if request.preview {
        let art = render_preview(&request.payload)?;
        writeln!(console, "{art}")?;
        console.flush()?;
    }

    let base_name = sanitize_file_name(&request.payload);
    let path = config.output_path(&base_name);

    let palette = Palette::parse(&request.foreground, &request.background)?;
    let png = QrEncoder::with_ecc_level(request.ec_level).render_png(&request.payload, palette)?;

    tokio::fs::write(&path, &png).await?;
    info!(path = %path.display(), bytes = png.len(), ec_level = %request.ec_level, "Wrote QR code");

    Ok(SavedCode {
        file_name: format!("{base_name}.png"),
        path,
    })
}

/// Print the human-readable outcome of a session.
pub fn report<O: Write, E: Write>(
    outcome: &Result<SavedCode>,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<()> {
    match outcome {
        Ok(saved) => writeln!(stdout, "✅ QR Code saved as: {}", saved.file_name),
        Err(err) => {
            debug!(error = %err, "QR code generation failed");
            writeln!(stderr, "❌ Error generating QR Code: {err}")
        }
    }
}
