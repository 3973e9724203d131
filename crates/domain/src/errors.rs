//! Closed set of person construction failures.

use outcome_shared::{ErrorCode, ErrorEnvelope};
use serde::Serialize;
use std::fmt;

/// Why a `(name, age)` pair could not become a `Person`.
///
/// Each variant carries the human-readable message produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum AppError {
    /// The name was the empty string.
    EmptyName(String),
    /// The age text did not parse as an integer.
    InvalidAgeValue(String),
    /// The age parsed but fell outside `1..=120`.
    InvalidAgeRange(String),
}

impl AppError {
    /// The message stored when the cause was produced.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::EmptyName(message)
            | Self::InvalidAgeValue(message)
            | Self::InvalidAgeRange(message) => message,
        }
    }

    /// Stable code identifier within the `domain` namespace.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyName(_) => "empty_name",
            Self::InvalidAgeValue(_) => "invalid_age_value",
            Self::InvalidAgeRange(_) => "invalid_age_range",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for ErrorEnvelope {
    fn from(error: AppError) -> Self {
        let code = ErrorCode::new("domain", error.code());
        let field = match &error {
            AppError::EmptyName(_) => "name",
            AppError::InvalidAgeValue(_) | AppError::InvalidAgeRange(_) => "age",
        };
        Self::expected(code, error.to_string()).with_metadata("field", field)
    }
}
