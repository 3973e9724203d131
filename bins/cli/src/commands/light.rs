//! Traffic light command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use outcome_domain::{TrafficLight, describe_light};

/// Describe the traffic light named by `input`.
pub fn run_light(mode: OutputMode, input: &str) -> Result<CliOutput, CliError> {
    let message = describe_light(input);

    let stdout = if mode.is_json() {
        let light = TrafficLight::from_text(input).into_option();
        to_json_line(&serde_json::json!({
            "input": input,
            "light": light,
            "message": message,
        }))?
    } else {
        format!("{message}\n")
    };

    Ok(CliOutput::ok(stdout))
}
