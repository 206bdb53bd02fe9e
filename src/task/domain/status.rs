//! Completion-aware task status and its date-driven transitions.
//!
//! Status is derived from three inputs only: the task deadline, the current
//! calendar date, and whether the caller wants the task completed. Nothing
//! here reads a clock; callers pass `today` in, which keeps every transition a
//! pure function. Status is recomputed when a task is written and is not
//! refreshed in the background, so a task whose deadline passes while nobody
//! touches it keeps its previous status until the next write.

use super::ParseTaskStatusError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Open task whose deadline, if any, has not passed.
    Active,
    /// Open task whose deadline has passed.
    Overdue,
    /// Task completed on or before its deadline.
    Completed,
    /// Task completed after its deadline had passed.
    Late,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
            Self::Late => "late",
        }
    }

    /// Returns `true` for the statuses reached by completing a task.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed | Self::Late)
    }

    /// Status of a task that has just been created or edited.
    ///
    /// Every write that replaces task content restarts the lifecycle at
    /// [`TaskStatus::Active`] and then applies the overdue check, so an
    /// edited `Completed` or `Late` task reopens.
    #[must_use]
    pub fn restarted(deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self::Active.with_overdue_check(deadline, today)
    }

    /// Moves an active task to [`TaskStatus::Overdue`] when its deadline is
    /// strictly before `today`. Other statuses are returned unchanged.
    #[must_use]
    pub fn with_overdue_check(self, deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        if self == Self::Active && is_past_due(deadline, today) {
            Self::Overdue
        } else {
            self
        }
    }

    /// Status after a completion toggle.
    ///
    /// Completing yields `Late` past the deadline and `Completed` otherwise;
    /// reopening yields `Overdue` past the deadline and `Active` otherwise.
    #[must_use]
    pub fn after_completion_toggle(
        completed: bool,
        deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        match (completed, is_past_due(deadline, today)) {
            (true, true) => Self::Late,
            (true, false) => Self::Completed,
            (false, true) => Self::Overdue,
            (false, false) => Self::Active,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "overdue" => Ok(Self::Overdue),
            "completed" => Ok(Self::Completed),
            "late" => Ok(Self::Late),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Returns `true` when `deadline` exists and lies strictly before `today`.
///
/// A deadline equal to today is not past due.
#[must_use]
pub fn is_past_due(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    deadline.is_some_and(|due| today > due)
}
