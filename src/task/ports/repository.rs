//! Repository port for task persistence and ordered listing.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordering applied when listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskOrder {
    /// The store's natural ordering (insertion order for bundled adapters).
    #[default]
    Unordered,
    /// Earliest deadline first; tasks without a deadline come last.
    DeadlineAscending,
    /// Most recently created first.
    CreatedDescending,
}

impl TaskOrder {
    /// Resolves a client-supplied sort key.
    ///
    /// `"deadline"` and `"created"` are recognised; every other value,
    /// including the empty string, resolves to [`TaskOrder::Unordered`]
    /// rather than an error.
    #[must_use]
    pub fn from_sort_key(key: &str) -> Self {
        match key {
            "deadline" => Self::DeadlineAscending,
            "created" => Self::CreatedDescending,
            _ => Self::Unordered,
        }
    }
}

/// Task persistence contract.
///
/// Each call is expected to be atomic with respect to other calls on the
/// same task. Callers do no locking of their own.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot
    /// write the record.
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task and refreshes its modification
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task in the requested order.
    async fn list(&self, order: TaskOrder) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
