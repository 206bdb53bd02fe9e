//! Task aggregate root and the values used to create and revise it.

use super::{TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// User-editable task fields after directive extraction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    /// Cleaned, validated title.
    pub title: TaskTitle,
    /// Free-form description.
    pub description: Option<String>,
    /// Calendar deadline.
    pub deadline: Option<NaiveDate>,
    /// Resolved priority.
    pub priority: TaskPriority,
}

/// A task that has not been stored yet.
///
/// The task store assigns the identifier and timestamps when it persists the
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    content: TaskContent,
    status: TaskStatus,
}

impl NewTask {
    /// Creates a new task starting its lifecycle on `today`.
    #[must_use]
    pub fn new(content: TaskContent, today: NaiveDate) -> Self {
        let status = TaskStatus::restarted(content.deadline, today);
        Self { content, status }
    }

    /// Returns the task content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Turns the value into a stored task with the given identifier.
    ///
    /// Both timestamps are taken from `clock`.
    #[must_use]
    pub fn into_task(self, id: TaskId, clock: &impl Clock) -> Task {
        let timestamp = clock.utc();
        let TaskContent {
            title,
            description,
            deadline,
            priority,
        } = self.content;
        Task {
            id,
            title,
            description,
            deadline,
            status: self.status,
            priority,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted deadline.
    pub deadline: Option<NaiveDate>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every editable field and restarts the status lifecycle.
    ///
    /// A completed task becomes active (or overdue) again.
    pub fn revise(&mut self, content: TaskContent, today: NaiveDate) {
        let TaskContent {
            title,
            description,
            deadline,
            priority,
        } = content;
        self.title = title;
        self.description = description;
        self.deadline = deadline;
        self.priority = priority;
        self.status = TaskStatus::restarted(deadline, today);
    }

    /// Marks the task completed or reopens it, leaving other fields intact.
    pub fn set_completed(&mut self, completed: bool, today: NaiveDate) {
        self.status = TaskStatus::after_completion_toggle(completed, self.deadline, today);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
