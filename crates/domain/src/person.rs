//! Person record and its optional safe constructor.

use outcome_shared::{BoundedI32, Maybe};
use serde::Serialize;

/// Inclusive range of constructible ages.
pub type Age = BoundedI32<1, 120>;

/// A named person with an age.
///
/// A `Person` can only be created through [`Person::new`] or
/// [`create_person`](crate::validation::create_person), which enforce a
/// non-empty name and an age in `1..=120`. [`Person::with_name`] and
/// [`Person::with_age`] copy without re-checking those rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Build a person when the name is non-empty and the age is in range.
    pub fn new(name: impl Into<String>, age: i32) -> Maybe<Self> {
        let name = name.into();
        if name.is_empty() {
            return Maybe::Absent;
        }

        Maybe::from(Age::new(age)).map(|age| Self::from_parts(name, age.get()))
    }

    /// Assemble a person from already-checked parts.
    pub(crate) const fn from_parts(name: String, age: i32) -> Self {
        Self { name, age }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Copy with a different name. The new name is not validated.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: self.age,
        }
    }

    /// Copy with a different age. The new age is not validated.
    #[must_use]
    pub fn with_age(&self, age: i32) -> Self {
        Self {
            name: self.name.clone(),
            age,
        }
    }
}

/// Rename a person, keeping their age.
///
/// Both the original and the renamed person must pass [`Person::new`];
/// otherwise the result is absent.
pub fn change_name(name: &str, age: i32, new_name: &str) -> Maybe<Person> {
    Person::new(name, age).flat_map(|person| Person::new(new_name, person.age()))
}
