//! Fail-fast validation of raw `(name, age)` text into a [`Person`].
//!
//! Name is always checked before age, so an empty name wins over a bad age.
//! Nothing is accumulated: the first failing rule is the one reported.

use crate::errors::AppError;
use crate::person::{Age, Person};
use outcome_shared::{Either, failure, success};

/// Rendered for [`AppError::EmptyName`].
pub const EMPTY_NAME_MESSAGE: &str = "Please provide a name.";
/// Rendered for [`AppError::InvalidAgeValue`].
pub const INVALID_AGE_VALUE_MESSAGE: &str = "Age must be a whole number.";
/// Rendered for [`AppError::InvalidAgeRange`].
pub const INVALID_AGE_RANGE_MESSAGE: &str = "Age must be between 1 and 120.";

/// Accept any non-empty name unchanged. Whitespace is not trimmed.
pub fn validate_name(input: &str) -> Either<AppError, String> {
    if input.is_empty() {
        failure(AppError::EmptyName("provided name is empty".to_owned()))
    } else {
        success(input.to_owned())
    }
}

/// Parse an `i32` age and require it to be in `1..=120`.
pub fn validate_age(input: &str) -> Either<AppError, i32> {
    Either::from(input.parse::<i32>())
        .map_failure(|_| AppError::InvalidAgeValue(format!("provided age is invalid: {input}")))
        .flat_map(|value| {
            Either::from(Age::try_new(value))
                .map(Age::get)
                .map_failure(|_| {
                    AppError::InvalidAgeRange(format!(
                        "provided age should be between {}-{}: {input}",
                        Age::LOWER,
                        Age::UPPER
                    ))
                })
        })
}

/// Validate the name, then the age, and build a [`Person`].
pub fn create_person(name: &str, age: &str) -> Either<AppError, Person> {
    let outcome = validate_name(name)
        .flat_map(|name| validate_age(age).map(|age| Person::from_parts(name, age)));

    if let Either::Failure(error) = &outcome {
        tracing::debug!(cause = error.code(), "person construction failed");
    }
    outcome
}

/// Build a person and upper-case their name.
///
/// The upper-cased copy is not re-validated.
pub fn uppercase_name(name: &str, age: &str) -> Either<AppError, Person> {
    create_person(name, age).map(|person| person.with_name(person.name().to_uppercase()))
}

/// Fixed user-facing text for each failure cause.
#[must_use]
pub const fn render_error(error: &AppError) -> &'static str {
    match error {
        AppError::EmptyName(_) => EMPTY_NAME_MESSAGE,
        AppError::InvalidAgeValue(_) => INVALID_AGE_VALUE_MESSAGE,
        AppError::InvalidAgeRange(_) => INVALID_AGE_RANGE_MESSAGE,
    }
}

/// Render `"{name} is {age}"` from the original inputs, or the failure text.
pub fn create_person_and_show(name: &str, age: &str) -> String {
    match create_person(name, age) {
        Either::Success(_) => format!("{name} is {age}"),
        Either::Failure(error) => render_error(&error).to_owned(),
    }
}
