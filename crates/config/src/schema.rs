//! Configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - Batch entries stay raw; they are validated by the domain, not here.

use outcome_domain::{PersonInput, default_inputs};
use outcome_shared::{ErrorCode, ErrorEnvelope, Validated};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Accepted `log.level` values, lowest to highest severity.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const DEFAULT_LOG_LEVEL: &str = "warn";

/// A config that passed [`AppConfig::validate_and_normalize`].
pub type ValidatedAppConfig = Validated<AppConfig>;

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AppConfig {
    /// Schema version.
    pub version: u32,
    /// Logging settings.
    pub log: LogConfig,
    /// Batch input settings.
    pub batch: BatchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            log: LogConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LogConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            json: false,
        }
    }
}

/// Batch input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct BatchConfig {
    /// Raw `(name, age)` pairs, in processing order.
    pub people: Vec<PersonInput>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            people: default_inputs(),
        }
    }
}

impl AppConfig {
    /// Check the version and normalise the log level to lower case.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedAppConfig, ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }

        let level = self.log.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigSchemaError::InvalidLogLevel {
                value: self.log.level,
            });
        }
        self.log.level = level;

        Ok(Validated::new(self))
    }
}

/// Schema validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// `log.level` is not one of [`LOG_LEVELS`].
    InvalidLogLevel {
        /// Raw value provided.
        value: String,
    },
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::InvalidLogLevel { .. } => ErrorCode::new("config", "invalid_log_level"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "config version {found} is not supported (expected {supported})"
            ),
            Self::InvalidLogLevel { .. } => write!(
                formatter,
                "log.level must be one of: {}",
                LOG_LEVELS.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => envelope
                .with_metadata("found", found.to_string())
                .with_metadata("supported", supported.to_string()),
            ConfigSchemaError::InvalidLogLevel { value } => envelope.with_metadata("value", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() -> Result<(), ConfigSchemaError> {
        let config = AppConfig::default().validate_and_normalize()?;
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
        assert_eq!(config.batch.people, default_inputs());
        Ok(())
    }

    #[test]
    fn log_level_is_normalized() -> Result<(), ConfigSchemaError> {
        let mut config = AppConfig::default();
        config.log.level = " DEBUG ".to_owned();
        let validated = config.validate_and_normalize()?;
        assert_eq!(validated.log.level, "debug");
        Ok(())
    }

    #[test]
    fn rejects_unknown_version_and_level() {
        let config = AppConfig {
            version: 7,
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate_and_normalize().err(),
            Some(ConfigSchemaError::UnsupportedVersion {
                found: 7,
                supported: CURRENT_CONFIG_VERSION
            })
        );

        let mut config = AppConfig::default();
        config.log.level = "loud".to_owned();
        let envelope: Option<ErrorEnvelope> =
            config.validate_and_normalize().err().map(Into::into);
        assert_eq!(
            envelope.map(|error| error.code.to_string()),
            Some("config:invalid_log_level".to_string())
        );
    }
}
