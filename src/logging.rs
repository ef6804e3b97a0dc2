//! Structured logging for TabStash.
//!
//! Logs go to stderr; stdout is reserved for the host bridge's action
//! stream. `RUST_LOG` overrides the configured level.

use std::io;
use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

use crate::types::errors::LogError;

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = level.trim().to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        return Err(LogError::InvalidLevel(level));
    }
    EnvFilter::try_new(&level).map_err(|e| LogError::InvalidLevel(e.to_string()))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Ok(());
    }
    let filter = build_filter(level)?;
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LogError::SetSubscriber(e.to_string()))?;
    let _ = LOGGING_INITIALIZED.set(());
    Ok(())
}
