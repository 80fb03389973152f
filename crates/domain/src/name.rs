use std::collections::BTreeSet;

use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

/// Canonical form used whenever exercise names are compared.
///
/// Surrounding whitespace is removed, inner runs of whitespace are collapsed and the result is
/// lowercased, so "  push-up " and "Push-Up" identify the same exercise.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseName(String);

impl ExerciseName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(ExerciseName(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn key(&self) -> String {
        normalize(&self.0)
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.key() == normalize(name)
    }
}

impl TryFrom<String> for ExerciseName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ExerciseName::new(&value)
    }
}

impl From<ExerciseName> for String {
    fn from(value: ExerciseName) -> Self {
        value.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Set of exercise names compared in normalized form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameSet(BTreeSet<String>);

impl NameSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.0.insert(normalize(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&normalize(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}
