//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present but empty or names an
//! unknown value fails instead of being ignored.

use crate::schema::{
    DiagnosticSinkKind, FieldguardConfig, LogFormat, LogLevel, ValidatedFieldguardConfig,
    parse_diagnostic_format,
};
use fieldguard_shared::{DiagnosticFormat, ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: diagnostic sink (`stdout`, `stderr`, `silent`).
pub const ENV_DIAGNOSTICS_SINK: &str = "FIELDGUARD_DIAGNOSTICS_SINK";
/// Env var: diagnostic line format (`text`, `json`).
pub const ENV_DIAGNOSTICS_FORMAT: &str = "FIELDGUARD_DIAGNOSTICS_FORMAT";
/// Env var: minimum log level.
pub const ENV_LOG_LEVEL: &str = "FIELDGUARD_LOG_LEVEL";
/// Env var: log output format (`text`, `json`).
pub const ENV_LOG_FORMAT: &str = "FIELDGUARD_LOG_FORMAT";

const ALL_ENV_VARS: [&str; 4] = [
    ENV_DIAGNOSTICS_SINK,
    ENV_DIAGNOSTICS_FORMAT,
    ENV_LOG_LEVEL,
    ENV_LOG_FORMAT,
];

/// Parsed env overrides. `None` means the variable was not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldguardEnv {
    /// Diagnostic sink override.
    pub diagnostics_sink: Option<DiagnosticSinkKind>,
    /// Diagnostic format override.
    pub diagnostics_format: Option<DiagnosticFormat>,
    /// Log level override.
    pub log_level: Option<LogLevel>,
    /// Log format override.
    pub log_format: Option<LogFormat>,
}

impl FieldguardEnv {
    /// Parse overrides from an explicit map of env vars.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            diagnostics_sink: parse_optional_enum(
                map,
                ENV_DIAGNOSTICS_SINK,
                DiagnosticSinkKind::parse,
            )?,
            diagnostics_format: parse_optional_enum(
                map,
                ENV_DIAGNOSTICS_FORMAT,
                parse_diagnostic_format,
            )?,
            log_level: parse_optional_enum(map, ENV_LOG_LEVEL, LogLevel::parse)?,
            log_format: parse_optional_enum(map, ENV_LOG_FORMAT, LogFormat::parse)?,
        })
    }

    /// Parse overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_ENV_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_owned(), value);
            }
        }
        Self::from_map(&map)
    }
}

/// Apply env overrides on top of `base` and validate the result.
pub fn apply_env_overrides(
    mut base: FieldguardConfig,
    env: &FieldguardEnv,
) -> Result<ValidatedFieldguardConfig, ErrorEnvelope> {
    if let Some(sink) = env.diagnostics_sink {
        base.diagnostics.sink = sink;
    }
    if let Some(format) = env.diagnostics_format {
        base.diagnostics.format = format;
    }
    if let Some(level) = env.log_level {
        base.logging.level = level;
    }
    if let Some(format) = env.log_format {
        base.logging.format = format;
    }

    base.validate().map_err(Into::into)
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Enum env var had an invalid value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} is set but empty"),
            Self::InvalidEnum { var, value } => {
                write!(formatter, "{var} has unsupported value `{value}`")
            },
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidEnum { var, value } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
        }
    }
}

fn parse_optional_enum<T>(
    map: &BTreeMap<String, String>,
    var: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    parse(trimmed)
        .map(Some)
        .ok_or_else(|| EnvParseError::InvalidEnum {
            var,
            value: trimmed.to_owned(),
        })
}
