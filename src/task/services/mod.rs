//! Application services for task workflow orchestration.

mod config;
mod workflow;

pub use config::{DEFAULT_MAX_TITLE_LENGTH, TaskWorkflowConfig};
pub use workflow::{
    TaskInput, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService, ValidationError,
};
