//! Configuration schema, defaults, and validation.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Unknown keys are rejected; missing keys fall back to defaults.
//! - Validation returns typed errors mapped to `ErrorEnvelope`.

use fieldguard_domain::Validator;
use fieldguard_shared::{
    DiagnosticFormat, DiagnosticSink, ErrorCode, ErrorEnvelope, SilentDiagnosticSink,
    StderrDiagnosticSink, StdoutDiagnosticSink, Validated,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct FieldguardConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Where and how constraint check lines are written.
    pub diagnostics: DiagnosticsConfig,
    /// Structured logging settings.
    pub logging: LoggingConfig,
}

impl Default for FieldguardConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            diagnostics: DiagnosticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FieldguardConfig {
    /// Validate the config.
    pub const fn validate(self) -> Result<ValidatedFieldguardConfig, ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(Validated::new(self))
    }
}

/// Validated config proof.
pub type ValidatedFieldguardConfig = Validated<FieldguardConfig>;

/// Diagnostic output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DiagnosticsConfig {
    /// Output target for check lines.
    pub sink: DiagnosticSinkKind,
    /// Line format.
    pub format: DiagnosticFormat,
}

impl DiagnosticsConfig {
    /// Build a validator writing to the configured sink in the configured format.
    #[must_use]
    pub fn build_validator(self) -> Validator {
        Validator::new(self.sink.build()).with_format(self.format)
    }
}

/// Output target for diagnostic lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSinkKind {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Discard diagnostics.
    Silent,
}

impl DiagnosticSinkKind {
    /// Parse a sink name (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "stdout" => Some(Self::Stdout),
            "stderr" => Some(Self::Stderr),
            "silent" | "none" => Some(Self::Silent),
            _ => None,
        }
    }

    fn build(self) -> Arc<dyn DiagnosticSink> {
        match self {
            Self::Stdout => Arc::new(StdoutDiagnosticSink),
            Self::Stderr => Arc::new(StderrDiagnosticSink),
            Self::Silent => Arc::new(SilentDiagnosticSink),
        }
    }
}

/// Parse a diagnostic format name (case-insensitive).
#[must_use]
pub fn parse_diagnostic_format(value: &str) -> Option<DiagnosticFormat> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Some(DiagnosticFormat::Text),
        "json" => Some(DiagnosticFormat::Json),
        _ => None,
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
}

/// Minimum log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational events and above.
    #[default]
    Info,
    /// Debug events and above.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Parse a level name (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Filter directive understood by `tracing-subscriber`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Config schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "config version {found} is not supported (expected {supported})"
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let message = error.to_string();
        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => {
                Self::expected(ErrorCode::new("config", "unsupported_version"), message)
                    .with_metadata("found", found.to_string())
                    .with_metadata("supported", supported.to_string())
            },
        }
    }
}

/// Parse a config from a JSON string and validate it.
pub fn parse_config_json(input: &str) -> Result<ValidatedFieldguardConfig, ErrorEnvelope> {
    let config: FieldguardConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;

    config.validate().map_err(Into::into)
}

/// Parse a config from a TOML string and validate it.
pub fn parse_config_toml(input: &str) -> Result<ValidatedFieldguardConfig, ErrorEnvelope> {
    let config: FieldguardConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;

    config.validate().map_err(Into::into)
}
