//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{AppConfig, AppEnv, ValidatedAppConfig, apply_env_overrides};
use outcome_shared::{ErrorCode, ErrorEnvelope};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Load the config from an optional `.json` / `.toml` file path.
pub fn load_app_config_from_path(
    config_path: Option<&Path>,
    env: &AppEnv,
) -> Result<ValidatedAppConfig, ErrorEnvelope> {
    let config = match config_path {
        None => {
            tracing::debug!("no config file given; using defaults");
            AppConfig::default()
        },
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            tracing::debug!(
                path = %path.display(),
                format = format.as_str(),
                "loading config file"
            );
            parse_config_unvalidated(&config_text, format)?
        },
    };

    apply_env_overrides(config, env)
}

/// Load the config from std env and an optional file path.
pub fn load_app_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedAppConfig, ErrorEnvelope> {
    let env = AppEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_app_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &AppConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_json"),
            format!("failed to serialize config: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &AppConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn parse_config_unvalidated(input: &str, format: ConfigFormat) -> Result<AppConfig, ErrorEnvelope> {
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

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
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
        .with_metadata("extension", other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome_domain::PersonInput;
    use std::path::PathBuf;

    #[test]
    fn defaults_when_no_path_given() -> Result<(), ErrorEnvelope> {
        let config = load_app_config_from_path(None, &AppEnv::default())?;
        assert_eq!(config.as_ref(), &AppConfig::default());
        Ok(())
    }

    #[test]
    fn env_beats_config_file_values() -> Result<(), ErrorEnvelope> {
        let env = AppEnv {
            log_level: Some("error".to_owned()),
            log_json: None,
        };
        let config =
            parse_config_unvalidated(r#"{"log": {"level": "debug"}}"#, ConfigFormat::Json)?;
        let config = apply_env_overrides(config, &env)?;
        assert_eq!(config.log.level, "error");
        Ok(())
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let error = parse_config_unvalidated(r#"{"verbose": true}"#, ConfigFormat::Json).err();
        assert_eq!(
            error.as_ref().map(|error| error.code.to_string()),
            Some("config:invalid_json".to_owned())
        );
        assert_eq!(
            error.and_then(|error| error.metadata.get("source").cloned()),
            Some("config".to_owned())
        );
    }

    #[test]
    fn toml_overrides_batch_people() -> Result<(), ErrorEnvelope> {
        let config = parse_config_unvalidated(
            r#"
version = 1

[[batch.people]]
name = "Fred"
age = "32"
"#,
            ConfigFormat::Toml,
        )?;
        let config = config.validate_and_normalize()?;
        assert_eq!(config.batch.people, vec![PersonInput::new("Fred", "32")]);
        assert_eq!(config.log.level, "warn");
        Ok(())
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            detect_config_format(&PathBuf::from("a.TOML")).ok(),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            detect_config_format(&PathBuf::from("a")).ok(),
            Some(ConfigFormat::Json)
        );
        let error = detect_config_format(&PathBuf::from("a.yaml")).err();
        assert_eq!(
            error.and_then(|error| error.metadata.get("extension").cloned()),
            Some("yaml".to_owned())
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let path = Path::new("/nonexistent/outcome.json");
        let error = load_app_config_from_path(Some(path), &AppEnv::default()).err();
        assert_eq!(
            error.map(|error| error.code.code().to_owned()),
            Some("config_file_not_found".to_owned())
        );
    }

    #[test]
    fn pretty_json_round_trips_through_loader() -> Result<(), ErrorEnvelope> {
        let json = to_pretty_json(&AppConfig::default())?;
        assert!(json.ends_with('\n'));
        let config = parse_config_unvalidated(&json, ConfigFormat::Json)?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    }
}
