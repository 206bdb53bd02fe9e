//! Task management for taskflow.
//!
//! Tasks carry free-text titles that may embed shorthand directives for
//! priority (`!1`..`!4`) and deadline (`!before 01.05.2025`). Writes extract
//! those directives, reconcile them with explicitly supplied fields, validate
//! the cleaned title and derive a completion-aware status from the deadline
//! and the current date. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
