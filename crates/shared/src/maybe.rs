//! Optional values without sentinels.
//!
//! [`Maybe`] models a computation that may or may not produce a value. It is
//! consumed by exhaustive `match` or by the [`Maybe::map`] /
//! [`Maybe::flat_map`] combinators; a value is never mutated once built.

/// Either exactly one value of type `A`, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

/// Wrap a known value.
pub const fn present<A>(value: A) -> Maybe<A> {
    Maybe::Present(value)
}

/// The empty [`Maybe`].
pub const fn absent<A>() -> Maybe<A> {
    Maybe::Absent
}

impl<A> Maybe<A> {
    /// Wrap a known value.
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// The empty value.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns true when a value is held.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true when no value is held.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Apply `op` to the held value; absence propagates and `op` is not called.
    pub fn map<B, F>(self, op: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(op(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Sequence a dependent optional computation, flattening the result.
    pub fn flat_map<B, F>(self, op: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => op(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only when `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            Self::Present(_) | Self::Absent => Self::Absent,
        }
    }

    /// Collapse both variants into a single value.
    pub fn fold<B, N, P>(self, on_absent: N, on_present: P) -> B
    where
        N: FnOnce() -> B,
        P: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Return the held value or `default`.
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Borrow the held value.
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Convert into a standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}
