//! Traffic light enumeration and its optional text constructor.

use outcome_shared::Maybe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered when the light is red.
pub const RED_MESSAGE: &str = "Stop! The light is red.";
/// Rendered when the light is green.
pub const GREEN_MESSAGE: &str = "Go! The light is green.";
/// Rendered when the light is yellow.
pub const YELLOW_MESSAGE: &str = "Caution! The light is yellow.";

/// The three states of a traffic light. No other value is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    /// Stop.
    Red,
    /// Go.
    Green,
    /// Prepare to stop.
    Yellow,
}

impl TrafficLight {
    /// Canonical lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }

    /// Parse an exact, case-sensitive identifier; anything else is absent.
    pub fn from_text(input: &str) -> Maybe<Self> {
        match input {
            "red" => Maybe::Present(Self::Red),
            "green" => Maybe::Present(Self::Green),
            "yellow" => Maybe::Present(Self::Yellow),
            _ => Maybe::Absent,
        }
    }

    /// Fixed message for this light.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Red => RED_MESSAGE,
            Self::Green => GREEN_MESSAGE,
            Self::Yellow => YELLOW_MESSAGE,
        }
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Describe the light named by `input`.
///
/// Unknown input is echoed back verbatim inside the rejection message.
pub fn describe_light(input: &str) -> String {
    match TrafficLight::from_text(input) {
        Maybe::Present(light) => light.message().to_owned(),
        Maybe::Absent => {
            tracing::debug!(input, "unrecognised traffic light");
            format!("'{input}' is not a traffic light colour.")
        },
    }
}
