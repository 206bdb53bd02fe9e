//! `PostgreSQL` integration tests for the task workflow service.

use super::helpers::{BoxError, postgres_context};
use crate::test_helpers::date;
use rstest::rstest;
use std::sync::Arc;
use taskflow::task::{
    domain::{TaskPriority, TaskStatus},
    services::{TaskInput, TaskWorkflowError, TaskWorkflowService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workflow_round_trip_through_postgres() -> Result<(), BoxError> {
    let Some(context) = postgres_context().await? else {
        return Ok(());
    };
    let service = TaskWorkflowService::new(
        Arc::clone(&context.repository),
        Arc::new(context.clock.clone()),
    );

    let created = service
        .create(TaskInput::new("Renew lease !1 !before 10.06.2025"))
        .await?;
    let completed = service.complete(created.id()).await?;
    let edited = service
        .update(created.id(), TaskInput::new("Renew lease early"))
        .await?;

    assert_eq!(created.title().as_str(), "Renew lease");
    assert_eq!(created.priority(), TaskPriority::Critical);
    assert_eq!(created.deadline(), Some(date(2025, 6, 10)));
    assert_eq!(created.status(), TaskStatus::Overdue);
    assert_eq!(completed.status(), TaskStatus::Late);
    assert_eq!(edited.status(), TaskStatus::Active);
    assert_eq!(edited.deadline(), None);
    assert_eq!(service.list(Some("created")).await?, vec![edited]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_input_writes_nothing() -> Result<(), BoxError> {
    let Some(context) = postgres_context().await? else {
        return Ok(());
    };
    let service = TaskWorkflowService::new(
        Arc::clone(&context.repository),
        Arc::new(context.clock.clone()),
    );

    let short = service.create(TaskInput::new("!2 no")).await;
    let unparsable = service
        .create(TaskInput::new("Bad date !before 00.01.2025"))
        .await;

    assert!(matches!(short, Err(TaskWorkflowError::Validation(_))));
    assert!(matches!(unparsable, Err(TaskWorkflowError::Parse(_))));
    assert!(service.list(None).await?.is_empty());
    Ok(())
}
