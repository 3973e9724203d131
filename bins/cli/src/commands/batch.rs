//! Batch command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use outcome_domain::{
    AppError, Either, Person, PersonInput, collect_errors, create_all_people, create_valid_people,
};

/// Which projection of the batch to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchCommandInput {
    /// Successfully built people.
    People,
    /// Failure causes.
    Errors,
    /// Every person, or the first failure.
    Strict,
}

/// Run one projection over `inputs`.
pub fn run_batch(
    mode: OutputMode,
    inputs: &[PersonInput],
    projection: BatchCommandInput,
) -> Result<CliOutput, CliError> {
    tracing::debug!(inputs = inputs.len(), ?projection, "running batch");

    match projection {
        BatchCommandInput::People => {
            let people = create_valid_people(inputs);
            Ok(CliOutput::ok(format_people(mode, &people)?))
        },
        BatchCommandInput::Errors => {
            let errors = collect_errors(inputs);
            Ok(CliOutput::ok(format_errors(mode, &errors)?))
        },
        BatchCommandInput::Strict => match create_all_people(inputs) {
            Either::Success(people) => Ok(CliOutput::ok(format_people(mode, &people)?)),
            Either::Failure(error) => Ok(CliOutput::with_exit_code(
                format_errors(mode, std::slice::from_ref(&error))?,
                ExitCode::InvalidInput,
            )),
        },
    }
}

fn format_people(mode: OutputMode, people: &[Person]) -> Result<String, CliError> {
    if mode.is_json() {
        return Ok(to_json_line(&serde_json::json!({ "people": people }))?);
    }

    Ok(people
        .iter()
        .map(|person| format!("{} is {}\n", person.name(), person.age()))
        .collect())
}

fn format_errors(mode: OutputMode, errors: &[AppError]) -> Result<String, CliError> {
    if mode.is_json() {
        return Ok(to_json_line(&serde_json::json!({ "errors": errors }))?);
    }

    Ok(errors
        .iter()
        .map(|error| format!("{}: {}\n", error.code(), error.message()))
        .collect())
}
