//! Taskflow: task records with inline priority and deadline directives.
//!
//! This crate provides the core of a task tracker: extracting shorthand
//! directives from task titles, validating the cleaned titles, and keeping a
//! deadline-aware status up to date whenever a task is written.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Directive parsing, status derivation and task workflow

pub mod task;
