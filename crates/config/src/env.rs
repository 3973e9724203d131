//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is set but malformed fails fast
//! instead of being ignored.

use crate::schema::{AppConfig, ValidatedAppConfig};
use outcome_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: log level override.
pub const ENV_LOG_LEVEL: &str = "OUTCOME_LOG_LEVEL";
/// Env var: JSON log output toggle.
pub const ENV_LOG_JSON: &str = "OUTCOME_LOG_JSON";

/// Parsed env overrides. `None` means the variable was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEnv {
    /// Value of [`ENV_LOG_LEVEL`].
    pub log_level: Option<String>,
    /// Value of [`ENV_LOG_JSON`].
    pub log_json: Option<bool>,
}

impl AppEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        let log_level = map
            .get(ENV_LOG_LEVEL)
            .map(|value| parse_non_empty(ENV_LOG_LEVEL, value))
            .transpose()?;
        let log_json = map
            .get(ENV_LOG_JSON)
            .map(|value| parse_bool(ENV_LOG_JSON, value))
            .transpose()?;

        Ok(Self {
            log_level,
            log_json,
        })
    }

    /// Parse env overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in [ENV_LOG_LEVEL, ENV_LOG_JSON] {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }

        Self::from_map(&map)
    }
}

/// Apply env overrides to a base config (env wins over file/default values).
pub fn apply_env_overrides(
    base: AppConfig,
    env: &AppEnv,
) -> Result<ValidatedAppConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(level) = &env.log_level {
        config.log.level.clone_from(level);
    }
    if let Some(json) = env.log_json {
        config.log.json = json;
    }

    config.validate_and_normalize().map_err(Into::into)
}

fn parse_non_empty(var: &'static str, value: &str) -> Result<String, EnvParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, EnvParseError> {
    let normalized = parse_non_empty(var, value)?.to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: value.to_owned(),
        }),
    }
}

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
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
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn parses_known_variables() -> Result<(), EnvParseError> {
        let env = AppEnv::from_map(&env_map(&[
            (ENV_LOG_LEVEL, " info "),
            (ENV_LOG_JSON, "YES"),
        ]))?;
        assert_eq!(env.log_level.as_deref(), Some("info"));
        assert_eq!(env.log_json, Some(true));
        Ok(())
    }

    #[test]
    fn missing_variables_are_none() -> Result<(), EnvParseError> {
        assert_eq!(AppEnv::from_map(&BTreeMap::new())?, AppEnv::default());
        Ok(())
    }

    #[test]
    fn malformed_values_fail_fast() {
        assert_eq!(
            AppEnv::from_map(&env_map(&[(ENV_LOG_JSON, "maybe")])),
            Err(EnvParseError::InvalidBool {
                var: ENV_LOG_JSON,
                value: "maybe".to_owned()
            })
        );
        assert_eq!(
            AppEnv::from_map(&env_map(&[(ENV_LOG_LEVEL, "  ")])),
            Err(EnvParseError::EmptyValue { var: ENV_LOG_LEVEL })
        );
    }

    #[test]
    fn env_wins_over_base_config() -> Result<(), ErrorEnvelope> {
        let env = AppEnv {
            log_level: Some("TRACE".to_owned()),
            log_json: Some(true),
        };
        let config = apply_env_overrides(AppConfig::default(), &env)?;
        assert_eq!(config.log.level, "trace");
        assert!(config.log.json);
        Ok(())
    }

    #[test]
    fn invalid_env_level_is_reported_as_config_error() {
        let env = AppEnv {
            log_level: Some("chatty".to_owned()),
            log_json: None,
        };
        let error = apply_env_overrides(AppConfig::default(), &env).err();
        assert_eq!(
            error.and_then(|error| error.metadata.get("value").cloned()),
            Some("chatty".to_owned())
        );
    }
}
