//! Validated task title.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of characters in a title once directives are removed.
pub const MIN_TITLE_LENGTH: usize = 4;

/// Task title with directives already stripped.
///
/// Length is measured in characters, so multi-byte scripts are not
/// penalised. No upper bound is enforced here; oversized raw input is
/// rejected before directive extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a title using [`MIN_TITLE_LENGTH`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooShort`] when the trimmed value has
    /// fewer than [`MIN_TITLE_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::with_minimum(value, MIN_TITLE_LENGTH)
    }

    /// Creates a title requiring at least `minimum` characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooShort`] when the trimmed value has
    /// fewer than `minimum` characters.
    pub fn with_minimum(value: impl Into<String>, minimum: usize) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < minimum {
            return Err(TaskDomainError::TitleTooShort { length, minimum });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a title read back from storage without re-validating it.
    ///
    /// Stored titles were validated when written, possibly under a
    /// different minimum length.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
