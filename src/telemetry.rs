// Telemetry
// tracing setup; records go to a file because stdout belongs to the TUI

use std::fs::File;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid log level/filter '{value}'")]
    EnvFilter { value: String },

    #[error("telemetry already initialized")]
    AlreadyInitialized,
}

/// Initialize the global tracing subscriber writing to `log_path`.
///
/// `RUST_LOG` overrides `default_filter` when set.
pub fn init(log_path: &str, default_filter: &str) -> Result<(), TelemetryError> {
    let file = File::create(log_path).map_err(|source| TelemetryError::LogFile {
        path: log_path.to_string(),
        source,
    })?;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(default_filter).map_err(|_| TelemetryError::EnvFilter {
                value: default_filter.to_string(),
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)
}
