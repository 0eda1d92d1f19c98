//! Tracing subscriber setup.
//!
//! Events go to stderr so stdout carries only diagnostic and case lines.

use crate::error::CliError;
use fieldguard_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(logging: LoggingConfig) -> Result<(), CliError> {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match logging.format {
        LogFormat::Text => builder.with_ansi(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|error| CliError::Telemetry(error.to_string()))
}
