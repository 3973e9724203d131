//! Config command handlers.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::OutputMode;
use outcome_config::{AppConfig, to_pretty_json, to_pretty_toml};

/// Print the effective config (JSON or TOML).
pub fn run_config_show(mode: OutputMode, config: &AppConfig) -> Result<CliOutput, CliError> {
    let stdout = if mode.is_json() {
        to_pretty_json(config)?
    } else {
        to_pretty_toml(config)?
    };

    Ok(CliOutput::ok(stdout))
}
