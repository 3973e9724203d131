//! Person construction command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use outcome_domain::{Either, Maybe, change_name, create_person, render_error, uppercase_name};
use outcome_shared::ErrorEnvelope;

/// Validate `name` and `age`, optionally upper-casing the name.
pub fn run_person(
    mode: OutputMode,
    name: &str,
    age: &str,
    upper: bool,
) -> Result<CliOutput, CliError> {
    let outcome = if upper {
        uppercase_name(name, age)
    } else {
        create_person(name, age)
    };

    match outcome {
        Either::Success(person) => {
            let stdout = if mode.is_json() {
                to_json_line(&serde_json::json!({ "status": "ok", "person": person }))?
            } else {
                // Same shape as `create_person_and_show`: the age is echoed as typed.
                format!("{} is {age}\n", person.name())
            };
            Ok(CliOutput::ok(stdout))
        },
        Either::Failure(error) => {
            tracing::info!(cause = error.code(), "person rejected");
            let rendered = render_error(&error);
            let stdout = if mode.is_json() {
                let envelope = ErrorEnvelope::from(error);
                to_json_line(&serde_json::json!({
                    "status": "error",
                    "message": rendered,
                    "error": envelope,
                }))?
            } else {
                format!("{rendered}\n")
            };
            Ok(CliOutput::with_exit_code(stdout, ExitCode::InvalidInput))
        },
    }
}

/// Rename a valid person, keeping their age.
pub fn run_rename(
    mode: OutputMode,
    name: &str,
    age: i32,
    new_name: &str,
) -> Result<CliOutput, CliError> {
    let renamed = change_name(name, age, new_name);

    let stdout = if mode.is_json() {
        to_json_line(&serde_json::json!({ "person": renamed.as_ref().into_option() }))?
    } else {
        match &renamed {
            Maybe::Present(person) => format!("{} is {}\n", person.name(), person.age()),
            Maybe::Absent => "rename rejected\n".to_owned(),
        }
    };

    let exit_code = match renamed {
        Maybe::Present(_) => ExitCode::Ok,
        Maybe::Absent => ExitCode::InvalidInput,
    };
    Ok(CliOutput::with_exit_code(stdout, exit_code))
}
