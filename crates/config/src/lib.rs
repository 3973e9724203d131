//! # outcome-config
//!
//! Configuration schema, validation, and loading for the `outcome` CLI.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{AppEnv, ENV_LOG_JSON, ENV_LOG_LEVEL, EnvParseError, apply_env_overrides};
pub use load::{load_app_config_from_path, load_app_config_std_env, to_pretty_json, to_pretty_toml};
pub use schema::{
    AppConfig, BatchConfig, CURRENT_CONFIG_VERSION, ConfigSchemaError, LOG_LEVELS, LogConfig,
    ValidatedAppConfig,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
