//! Info command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use outcome_config::config_crate_version;
use outcome_domain::domain_crate_version;
use outcome_shared::shared_crate_version;

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let stdout = if mode.is_json() {
        to_json_line(&serde_json::json!({
            "status": "ok",
            "build": {
                "name": name,
                "version": version,
                "sharedVersion": shared_crate_version(),
                "domainVersion": domain_crate_version(),
                "configVersion": config_crate_version(),
            }
        }))?
    } else {
        format!(
            "status: ok\nname: {name}\nversion: {version}\nshared: {}\ndomain: {}\nconfig: {}\n",
            shared_crate_version(),
            domain_crate_version(),
            config_crate_version(),
        )
    };

    Ok(CliOutput::ok(stdout))
}
