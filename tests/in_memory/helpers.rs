//! Shared fixtures for in-memory workflow integration tests.

use crate::test_helpers::FixedClock;
use rstest::fixture;
use std::sync::Arc;
use taskflow::task::{adapters::memory::InMemoryTaskRepository, services::TaskWorkflowService};

/// Workflow service backed by the in-memory repository.
pub type TestService = TaskWorkflowService<InMemoryTaskRepository<FixedClock>, FixedClock>;

/// Service plus the clock it reads, so tests can move time.
pub struct Workspace {
    pub service: TestService,
    pub clock: FixedClock,
}

/// Provides a fresh workflow service with the clock on the reference day.
#[fixture]
pub fn workspace() -> Workspace {
    let clock = FixedClock::default();
    let repository = Arc::new(InMemoryTaskRepository::new(clock.clone()));
    let service = TaskWorkflowService::new(repository, Arc::new(clock.clone()));
    Workspace { service, clock }
}
