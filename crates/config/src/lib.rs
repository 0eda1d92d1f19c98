//! # fieldguard-config
//!
//! Configuration schema, env overrides, and file loading for the `fieldguard`
//! binary. This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_DIAGNOSTICS_FORMAT, ENV_DIAGNOSTICS_SINK, ENV_LOG_FORMAT, ENV_LOG_LEVEL, EnvParseError,
    FieldguardEnv, apply_env_overrides,
};
pub use load::{
    ConfigFormat, detect_config_format, load_config_from_path, load_config_std_env,
    to_pretty_json, to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigSchemaError, DiagnosticSinkKind, DiagnosticsConfig,
    FieldguardConfig, LogFormat, LogLevel, LoggingConfig, ValidatedFieldguardConfig,
    parse_config_json, parse_config_toml, parse_diagnostic_format,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguard_domain::domain_crate_version;
    use fieldguard_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        let version = config_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn config_can_use_domain_and_shared() {
        let domain_version = domain_crate_version();
        let shared_version = shared_crate_version();

        assert!(!domain_version.is_empty());
        assert!(!shared_version.is_empty());
    }
}
