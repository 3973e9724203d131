//! Recoverable errors as values.
//!
//! [`Either`] holds a success of type `A` or a failure cause of type `E`.
//! Sequencing through [`Either::flat_map`] and [`traverse`] is fail-fast: the
//! first failure is returned unchanged and later steps never run.

use crate::maybe::Maybe;

/// A success value or a failure cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Either<E, A> {
    /// The computation succeeded.
    Success(A),
    /// The computation failed with a cause.
    Failure(E),
}

/// Wrap a success value.
pub const fn success<E, A>(value: A) -> Either<E, A> {
    Either::Success(value)
}

/// Wrap a failure cause.
pub const fn failure<E, A>(cause: E) -> Either<E, A> {
    Either::Failure(cause)
}

impl<E, A> Either<E, A> {
    /// Wrap a success value.
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Wrap a failure cause.
    pub const fn failure(cause: E) -> Self {
        Self::Failure(cause)
    }

    /// Returns true for [`Either::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`Either::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transform the success value, leaving a failure untouched.
    pub fn map<B, F>(self, op: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Either::Success(op(value)),
            Self::Failure(cause) => Either::Failure(cause),
        }
    }

    /// Transform the failure cause, leaving a success untouched.
    pub fn map_failure<E2, F>(self, op: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(cause) => Either::Failure(op(cause)),
        }
    }

    /// Sequence a dependent fallible step. `op` is not invoked after a failure.
    pub fn flat_map<B, F>(self, op: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(cause) => Either::Failure(cause),
        }
    }

    /// Collapse both variants into a single value.
    pub fn fold<B, L, R>(self, on_failure: L, on_success: R) -> B
    where
        L: FnOnce(E) -> B,
        R: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Return the success value or `default`.
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Project the success side, discarding the cause.
    pub fn success_value(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// Project the failure side, discarding the value.
    pub fn failure_value(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(cause) => Maybe::Present(cause),
        }
    }

    /// Borrow both sides.
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(cause) => Either::Failure(cause),
        }
    }

    /// Convert into a standard [`Result`].
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(value: Result<A, E>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(value: Either<E, A>) -> Self {
        value.into_result()
    }
}

/// Apply `op` to every item, collecting successes in order.
///
/// Stops at the first failure and returns it; remaining items are not visited.
pub fn traverse<I, E, A, B, F>(items: I, mut op: F) -> Either<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<E, B>,
{
    let iter = items.into_iter();
    let mut collected = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match op(item) {
            Either::Success(value) => collected.push(value),
            Either::Failure(cause) => return Either::Failure(cause),
        }
    }

    Either::Success(collected)
}
