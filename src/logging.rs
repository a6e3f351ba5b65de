//! Logging utilities wrapping `tracing` initialisation

use crate::config::LoggingOptions;
use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Initialise the global tracing subscriber according to the provided logging options.
///
/// Logs are written to stderr so stdout carries only the prompt transcript.
/// Subsequent calls are ignored to avoid reinitialisation panics.
pub fn init(options: &LoggingOptions) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        // Already configured by tests or caller; nothing to do.
        return Ok(());
    }

    let env_filter = filter(&options.level)?;

    Registry::default()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(io::stderr)
                .with_ansi(options.color)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}

fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| Error::Config(format!("Invalid log level '{level}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        assert!(filter("debug").is_ok());
        assert!(filter("qrprompt=trace,warn").is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let err = filter("qrprompt=loud").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_init_is_idempotent() {
        let options = LoggingOptions::default();
        init(&options).unwrap();
        init(&options).unwrap();
    }
}
