//! Domain model for task management.
//!
//! The task domain covers title directive extraction, title validation and
//! date-driven status transitions. It performs no I/O and reads no clock:
//! callers supply the current date explicitly.

mod error;
mod ids;
mod macros;
mod priority;
mod status;
mod task;
mod title;

pub use error::{MacroParseError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use macros::{DEADLINE_KEYWORD, ParsedTitle};
pub use priority::TaskPriority;
pub use status::{TaskStatus, is_past_due};
pub use task::{NewTask, PersistedTaskData, Task, TaskContent};
pub use title::{MIN_TITLE_LENGTH, TaskTitle};
