//! # outcome-shared
//!
//! Outcome-as-value building blocks shared by every crate in the workspace.
//!
//! - [`Maybe`] - a value that may be absent, replacing sentinel markers
//! - [`Either`] - a success or a typed failure cause, replacing exceptions
//! - [`BoundedI32`] / [`Validated`] - invariants carried in the type
//! - [`ErrorEnvelope`] - the structured error used at crate boundaries
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Exhaustive by construction** - every outcome type is a closed enum
//! 3. **No hidden panics** - combinators never unwrap

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod either;
pub mod errors;
pub mod invariants;
pub mod maybe;

pub use either::{Either, failure, success, traverse};
pub use errors::{ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::{BoundedI32, BoundsError, Validated};
pub use maybe::{Maybe, absent, present};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
