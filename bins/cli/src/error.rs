use fieldguard_shared::ErrorEnvelope;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    Internal = 1,
    Violation = 2,
    InvalidConfig = 3,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug)]
pub enum CliError {
    /// Config file or env overrides were rejected.
    Config(ErrorEnvelope),
    /// A case hit a constraint violation under `--strict`.
    Violation(ErrorEnvelope),
    /// The tracing subscriber could not be installed.
    Telemetry(String),
    /// Writing case output failed.
    Io(std::io::Error),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::InvalidConfig,
            Self::Violation(_) => ExitCode::Violation,
            Self::Telemetry(_) | Self::Io(_) => ExitCode::Internal,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(envelope) => write!(formatter, "invalid config: {envelope}"),
            Self::Violation(envelope) => write!(formatter, "constraint violation: {envelope}"),
            Self::Telemetry(message) => write!(formatter, "telemetry error: {message}"),
            Self::Io(error) => write!(formatter, "io error: {error}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
