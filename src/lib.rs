//! qrprompt - interactive QR code generator
//!
//! Asks the operator for a payload and a few rendering options, optionally
//! previews the symbol in the terminal and saves it as a PNG named after the
//! payload.
//!
//! # Example
//!
//! ```no_run
//! use qrprompt::{AppConfig, QrRequest, app};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> qrprompt::Result<()> {
//!     let config = AppConfig::with_output_dir("out");
//!     let mut request = QrRequest::new("https://example.com");
//!     request.foreground = "navy".to_string();
//!
//!     let saved = app::generate(&config, &request, &mut std::io::stdout()).await?;
//!     println!("{}", saved.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod qr;
pub mod request;
pub mod sanitize;

// Re-exports for convenience
pub use error::{Error, Result};

pub use app::SavedCode;
pub use config::{AppConfig, LoggingOptions};
pub use prompt::Prompter;
pub use qr::{Palette, QrEncoder};
pub use request::{ErrorCorrection, QrRequest};
pub use sanitize::sanitize_file_name;
