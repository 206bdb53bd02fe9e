//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Cleaned title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Task status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Cleaned title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Task status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset replacing every mutable column of a task record.
///
/// `None` clears the column instead of leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Cleaned title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Task status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
