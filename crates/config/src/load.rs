//! Config loading helpers (env + file).
//!
//! Precedence, highest wins: env overrides, config file, defaults.

use crate::env::{FieldguardEnv, apply_env_overrides};
use crate::schema::{FieldguardConfig, ValidatedFieldguardConfig};
use fieldguard_shared::{ErrorCode, ErrorEnvelope};
use std::path::Path;

/// Config file syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` or no extension.
    Json,
    /// `.toml`.
    Toml,
}

/// Load the config from an optional file path and parsed env overrides.
pub fn load_config_from_path(
    config_path: Option<&Path>,
    env: &FieldguardEnv,
) -> Result<ValidatedFieldguardConfig, ErrorEnvelope> {
    let config = match config_path {
        None => FieldguardConfig::default(),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            parse_config_unvalidated(&config_text, format)?
        },
    };

    // env is applied last and also validates the merged config.
    let config = apply_env_overrides(config, env)?;
    tracing::debug!(
        event = "config.loaded",
        from_file = config_path.is_some(),
        diagnostics_sink = ?config.diagnostics.sink,
        log_level = config.logging.level.as_directive(),
        "effective config resolved"
    );
    Ok(config)
}

/// Load the config from the process environment and an optional file path.
pub fn load_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedFieldguardConfig, ErrorEnvelope> {
    let env = FieldguardEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &FieldguardConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &FieldguardConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Choose the config syntax from the path extension.
pub fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_owned())),
    }
}

fn parse_config_unvalidated(
    input: &str,
    format: ConfigFormat,
) -> Result<FieldguardConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}
