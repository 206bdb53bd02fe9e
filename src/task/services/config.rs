//! Configuration for task workflow limits.

use crate::task::domain::MIN_TITLE_LENGTH;
use serde::{Deserialize, Serialize};

/// Default maximum number of characters accepted in a raw title.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 1000;

/// Limits applied by the task workflow.
///
/// # Examples
///
/// ```
/// use taskflow::task::services::TaskWorkflowConfig;
///
/// let config = TaskWorkflowConfig::default();
/// assert_eq!(config.min_title_length, 4);
/// assert_eq!(config.max_title_length, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskWorkflowConfig {
    /// Minimum characters in a title after directives are removed.
    pub min_title_length: usize,
    /// Maximum characters in the raw title as submitted.
    pub max_title_length: usize,
}

impl TaskWorkflowConfig {
    /// Sets the minimum cleaned title length.
    #[must_use]
    pub const fn with_min_title_length(mut self, length: usize) -> Self {
        self.min_title_length = length;
        self
    }

    /// Sets the maximum raw title length.
    #[must_use]
    pub const fn with_max_title_length(mut self, length: usize) -> Self {
        self.max_title_length = length;
        self
    }
}

impl Default for TaskWorkflowConfig {
    fn default() -> Self {
        Self {
            min_title_length: MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}
