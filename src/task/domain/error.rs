//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is shorter than the minimum once directives are removed.
    #[error("title must be at least {minimum} characters long, got {length}")]
    TitleTooShort {
        /// Character count of the cleaned title.
        length: usize,
        /// Minimum accepted character count.
        minimum: usize,
    },
}

/// Error returned when a deadline directive carries an unreadable date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid deadline date '{0}', expected d.mm.yyyy or d-mm-yyyy")]
pub struct MacroParseError(pub String);

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
