//! # outcome-domain
//!
//! Domain entities and safe constructors built on `Maybe` and `Either`.
//!
//! - **Traffic lights** - `TrafficLight`, `describe_light`
//! - **People** - `Person`, the optional constructor `Person::new`, `change_name`
//! - **Validation** - `AppError`, `create_person`, `uppercase_name`,
//!   `create_person_and_show`
//! - **Batch** - `PersonInput`, `create_valid_people`, `collect_errors`
//! - **Stats** - `mean`
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use outcome_shared::{Either, Maybe, shared_crate_version};

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod batch;
pub mod errors;
pub mod person;
pub mod stats;
pub mod traffic_light;
pub mod validation;

pub use batch::{
    BatchReport, DEFAULT_PEOPLE, PersonInput, collect_errors, create_all_people,
    create_valid_people, default_inputs,
};
pub use errors::AppError;
pub use person::{Age, Person, change_name};
pub use stats::mean;
pub use traffic_light::{TrafficLight, describe_light};
pub use validation::{
    create_person, create_person_and_show, render_error, uppercase_name, validate_age,
    validate_name,
};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
