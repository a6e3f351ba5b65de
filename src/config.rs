//! qrprompt runtime configuration handling
//!
//! There is no configuration file. The only derived setting is the output
//! directory, resolved once from the running executable's location.

use crate::error::{Error, Result};
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Process-wide settings resolved at startup and passed around by reference
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory that receives generated PNG files
    pub output_dir: PathBuf,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl AppConfig {
    /// Resolve the configuration for this process.
    ///
    /// Generated images land next to the executable.
    pub fn discover() -> Result<Self> {
        let exe = env::current_exe()
            .map_err(|e| Error::Config(format!("Failed to locate executable: {e}")))?;
        let output_dir = exe
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                Error::Config(format!(
                    "Executable path '{}' has no parent directory",
                    exe.display()
                ))
            })?;

        let mut logging = LoggingOptions::default();
        logging.apply_env_overrides();

        Ok(Self::with_output_dir(output_dir).with_logging(logging))
    }

    /// Configuration writing into an explicit directory with default logging.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            logging: LoggingOptions::default(),
        }
    }

    fn with_logging(mut self, logging: LoggingOptions) -> Self {
        self.logging = logging;
        self
    }

    /// Full path of the PNG written for a sanitized base name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!("{file_name}.png"))
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRPROMPT_LOG_LEVEL`)
    pub level: String,
    /// ANSI colors in stderr logging; defaults to whether stderr is a terminal
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            color: io::stderr().is_terminal(),
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRPROMPT_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(color) = env::var("QRPROMPT_LOG_COLOR") {
            if let Some(parsed) = parse_switch(&color) {
                self.color = parsed;
            }
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}
