//! Service layer orchestrating task creation, edits and completion.
//!
//! Every write goes through the same pipeline: the raw title is checked for
//! shape, directives are extracted and reconciled with explicit fields, the
//! cleaned title is validated, and the status is recomputed against today's
//! date before the task reaches the repository.

use super::TaskWorkflowConfig;
use crate::task::{
    domain::{
        MacroParseError, NewTask, ParsedTitle, Task, TaskContent, TaskDomainError, TaskId,
        TaskPriority, TaskTitle,
    },
    ports::{TaskOrder, TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Task fields as submitted by a client.
///
/// Absent `priority` and `deadline` mean "not supplied": they may then be
/// filled from title directives. On update, absent fields do not keep the
/// previous values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deadline: Option<NaiveDate>,
    #[serde(default)]
    priority: Option<TaskPriority>,
}

impl TaskInput {
    /// Creates input with a raw title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            deadline: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit deadline, overriding any title directive.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets an explicit priority, overriding any title directive.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Checks the raw input before any directive is interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankTitle`] for a blank title and
    /// [`ValidationError::TitleTooLong`] when the raw title exceeds
    /// `config.max_title_length` characters.
    pub fn check_shape(&self, config: &TaskWorkflowConfig) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        let length = self.title.chars().count();
        if length > config.max_title_length {
            return Err(ValidationError::TitleTooLong {
                length,
                maximum: config.max_title_length,
            });
        }
        Ok(())
    }
}

/// Rejected task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw title is empty or whitespace.
    #[error("title must not be blank")]
    BlankTitle,

    /// The raw title exceeds the configured maximum.
    #[error("title must be at most {maximum} characters long, got {length}")]
    TitleTooLong {
        /// Character count of the raw title.
        length: usize,
        /// Maximum accepted character count.
        maximum: usize,
    },

    /// The cleaned title failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Service-level errors for task workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// Input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A deadline directive carried an unreadable date.
    #[error(transparent)]
    Parse(#[from] MacroParseError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskDomainError> for TaskWorkflowError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(ValidationError::Domain(err))
    }
}

impl From<TaskRepositoryError> for TaskWorkflowError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task workflow service operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
///
/// The service holds no locks and starts no background work. Atomicity of
/// each read-modify-write belongs to the repository.
#[derive(Clone)]
pub struct TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskWorkflowConfig,
}

impl<R, C> TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task workflow service with default limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            config: TaskWorkflowConfig::default(),
        }
    }

    /// Replaces the workflow limits.
    #[must_use]
    pub fn with_config(mut self, config: TaskWorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the workflow limits.
    #[must_use]
    pub const fn config(&self) -> &TaskWorkflowConfig {
        &self.config
    }

    /// Lists tasks ordered by `sort_key`.
    ///
    /// `"deadline"` sorts by ascending deadline and `"created"` by descending
    /// creation time. Any other key, or none, falls back to the repository's
    /// default ordering without an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the listing fails.
    pub async fn list(&self, sort_key: Option<&str>) -> TaskWorkflowResult<Vec<Task>> {
        let key = sort_key.unwrap_or_default();
        let order = TaskOrder::from_sort_key(key);
        if order == TaskOrder::Unordered && !key.is_empty() {
            tracing::debug!(sort_key = key, "unrecognised sort key, using default ordering");
        }
        Ok(self.repository.list(order).await?)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.load(id).await
    }

    /// Creates a task from client input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Validation`] or
    /// [`TaskWorkflowError::Parse`] when the input is rejected, and
    /// [`TaskWorkflowError::Repository`] when persistence fails.
    pub async fn create(&self, input: TaskInput) -> TaskWorkflowResult<Task> {
        let today = self.today();
        let content = self.resolve_content(input, today)?;
        let created = self.repository.store(NewTask::new(content, today)).await?;
        tracing::info!(
            task_id = %created.id(),
            status = %created.status(),
            priority = %created.priority(),
            "task created"
        );
        Ok(created)
    }

    /// Replaces every editable field of a task.
    ///
    /// Directives are re-applied to the new title and the status restarts
    /// from active, so editing a completed task reopens it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist,
    /// [`TaskWorkflowError::Validation`] or [`TaskWorkflowError::Parse`] when
    /// the input is rejected, and [`TaskWorkflowError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, input: TaskInput) -> TaskWorkflowResult<Task> {
        let mut task = self.load(id).await?;
        let today = self.today();
        let content = self.resolve_content(input, today)?;
        task.revise(content, today);
        let updated = self.repository.update(&task).await?;
        tracing::info!(task_id = %id, status = %updated.status(), "task updated");
        Ok(updated)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskWorkflowResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Marks a task completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist.
    pub async fn complete(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.set_completed(id, true).await
    }

    /// Reopens a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::NotFound`] when the task does not exist.
    pub async fn uncomplete(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.set_completed(id, false).await
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> TaskWorkflowResult<Task> {
        let mut task = self.load(id).await?;
        task.set_completed(completed, self.today());
        let updated = self.repository.update(&task).await?;
        tracing::info!(task_id = %id, status = %updated.status(), "task completion toggled");
        Ok(updated)
    }

    async fn load(&self, id: TaskId) -> TaskWorkflowResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskWorkflowError::NotFound(id))
    }

    fn resolve_content(&self, input: TaskInput, today: NaiveDate) -> TaskWorkflowResult<TaskContent> {
        input.check_shape(&self.config).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected task input");
        })?;

        let TaskInput {
            title,
            description,
            deadline,
            priority,
        } = input;
        let parsed = ParsedTitle::parse(&title, priority, deadline, today).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected task title directive");
        })?;
        let (cleaned, priority, deadline) = parsed.into_parts();
        let title = TaskTitle::with_minimum(cleaned, self.config.min_title_length)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected task title"))?;

        Ok(TaskContent {
            title,
            description,
            deadline,
            priority,
        })
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
