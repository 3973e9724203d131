//! Mean command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use outcome_domain::{Maybe, mean};

/// Print the mean of `values`, or `no values` for an empty list.
pub fn run_mean(mode: OutputMode, values: &[i64]) -> Result<CliOutput, CliError> {
    let result = mean(values);

    let stdout = if mode.is_json() {
        to_json_line(&serde_json::json!({
            "count": values.len(),
            "mean": result.into_option(),
        }))?
    } else {
        match result {
            Maybe::Present(value) => format!("{value}\n"),
            Maybe::Absent => "no values\n".to_owned(),
        }
    };

    Ok(CliOutput::ok(stdout))
}
