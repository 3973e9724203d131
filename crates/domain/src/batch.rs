//! Batch projections over raw `(name, age)` pairs.
//!
//! Every pair is validated on its own; a failure in one pair never stops the
//! others from being evaluated.

use crate::errors::AppError;
use crate::person::Person;
use crate::validation::create_person;
use outcome_shared::{Either, traverse};
use serde::{Deserialize, Serialize};

/// Fixed input list used when no other batch is configured.
///
/// Contains one empty name, one non-numeric age, one age below the range and
/// one above it, interleaved with valid entries.
pub const DEFAULT_PEOPLE: [(&str, &str); 7] = [
    ("Fred", "32"),
    ("", "27"),
    ("Wilma", "Thirty"),
    ("Barney", "0"),
    ("Betty", "121"),
    ("Pebbles", "1"),
    ("Dino", "120"),
];

/// Raw, unvalidated `(name, age)` text pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonInput {
    /// Name text, passed through untouched.
    pub name: String,
    /// Age text, parsed during validation.
    pub age: String,
}

impl PersonInput {
    /// Build an input pair.
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Validate this pair into a [`Person`].
    pub fn validate(&self) -> Either<AppError, Person> {
        create_person(&self.name, &self.age)
    }
}

/// [`DEFAULT_PEOPLE`] as owned inputs.
#[must_use]
pub fn default_inputs() -> Vec<PersonInput> {
    DEFAULT_PEOPLE
        .iter()
        .map(|(name, age)| PersonInput::new(*name, *age))
        .collect()
}

/// People that validated successfully, in input order.
#[must_use]
pub fn create_valid_people(inputs: &[PersonInput]) -> Vec<Person> {
    inputs
        .iter()
        .filter_map(|input| input.validate().success_value().into_option())
        .collect()
}

/// Failure causes, in input order.
#[must_use]
pub fn collect_errors(inputs: &[PersonInput]) -> Vec<AppError> {
    inputs
        .iter()
        .filter_map(|input| input.validate().failure_value().into_option())
        .collect()
}

/// All-or-nothing: every person, or the first failure in input order.
pub fn create_all_people(inputs: &[PersonInput]) -> Either<AppError, Vec<Person>> {
    traverse(inputs, PersonInput::validate)
}

/// Both projections from a single validation pass.
///
/// Equivalent to calling [`create_valid_people`] and [`collect_errors`]
/// separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Successfully built people, in input order.
    pub people: Vec<Person>,
    /// Failure causes, in input order.
    pub errors: Vec<AppError>,
}

impl BatchReport {
    /// Validate each input once and split the outcomes.
    #[must_use]
    pub fn evaluate(inputs: &[PersonInput]) -> Self {
        let mut report = Self::default();
        for input in inputs {
            match input.validate() {
                Either::Success(person) => report.people.push(person),
                Either::Failure(error) => report.errors.push(error),
            }
        }

        tracing::debug!(
            valid = report.people.len(),
            invalid = report.errors.len(),
            "batch evaluated"
        );
        report
    }
}
