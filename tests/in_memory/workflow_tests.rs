//! In-memory integration tests for task creation, edits and completion.

use super::helpers::{Workspace, workspace};
use crate::test_helpers::date;
use chrono::Days;
use eyre::ensure;
use rstest::rstest;
use taskflow::task::{
    domain::{TaskDomainError, TaskPriority, TaskStatus},
    services::{TaskInput, TaskWorkflowError, ValidationError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_of_a_task(workspace: Workspace) -> eyre::Result<()> {
    let service = &workspace.service;

    let created = service
        .create(TaskInput::new("Prepare slides !2 !before 20.06.2025").with_description("quarterly"))
        .await?;
    ensure!(created.title().as_str() == "Prepare slides");
    ensure!(created.priority() == TaskPriority::High);
    ensure!(created.deadline() == Some(date(2025, 6, 20)));
    ensure!(created.status() == TaskStatus::Active);

    let completed = service.complete(created.id()).await?;
    ensure!(completed.status() == TaskStatus::Completed);

    let reopened = service.uncomplete(created.id()).await?;
    ensure!(reopened.status() == TaskStatus::Active);

    service.delete(created.id()).await?;
    ensure!(service.list(None).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_passing_turns_completion_late(workspace: Workspace) -> eyre::Result<()> {
    let service = &workspace.service;
    let created = service
        .create(TaskInput::new("File taxes !before 16.06.2025"))
        .await?;

    workspace.clock.set_day(date(2025, 6, 17));
    let unchanged = service.get(created.id()).await?;
    let completed = service.complete(created.id()).await?;
    let reopened = service.uncomplete(created.id()).await?;

    ensure!(unchanged.status() == TaskStatus::Active);
    ensure!(completed.status() == TaskStatus::Late);
    ensure!(reopened.status() == TaskStatus::Overdue);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadline_on_the_current_day_is_not_yet_due(workspace: Workspace) -> eyre::Result<()> {
    let service = &workspace.service;
    let today = workspace.clock.today();

    let created = service
        .create(TaskInput::new("Same day work").with_deadline(today))
        .await?;
    let completed = service.complete(created.id()).await?;

    ensure!(created.status() == TaskStatus::Active);
    ensure!(completed.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_late_task_reopens_it(workspace: Workspace) -> eyre::Result<()> {
    let service = &workspace.service;
    let yesterday = workspace.clock.today() - Days::new(1);
    let created = service
        .create(TaskInput::new("Renew passport").with_deadline(yesterday))
        .await?;
    let completed = service.complete(created.id()).await?;
    ensure!(completed.status() == TaskStatus::Late);

    let edited = service
        .update(
            created.id(),
            TaskInput::new("Renew passport today").with_deadline(yesterday),
        )
        .await?;
    ensure!(edited.status() == TaskStatus::Overdue);

    let rescheduled = service
        .update(created.id(), TaskInput::new("Renew passport !before 01.07.2025"))
        .await?;
    ensure!(rescheduled.status() == TaskStatus::Active);
    ensure!(rescheduled.deadline() == Some(date(2025, 7, 1)));
    Ok(())
}

#[rstest]
#[case("!1 abc", 3)]
#[case("!before 01.07.2025 ab", 2)]
#[case("!4 !before", 0)]
#[tokio::test(flavor = "multi_thread")]
async fn titles_shortened_by_directives_are_rejected(
    workspace: Workspace,
    #[case] title: &str,
    #[case] length: usize,
) {
    let result = workspace.service.create(TaskInput::new(title)).await;

    assert!(
        matches!(
            result,
            Err(TaskWorkflowError::Validation(ValidationError::Domain(
                TaskDomainError::TitleTooShort { length: actual, .. }
            ))) if actual == length
        ),
        "unexpected result: {result:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreadable_deadline_on_update_keeps_stored_task(workspace: Workspace) -> eyre::Result<()> {
    let service = &workspace.service;
    let created = service.create(TaskInput::new("Stable title")).await?;

    let result = service
        .update(created.id(), TaskInput::new("Stable title !before 00.02.2025"))
        .await;

    ensure!(matches!(result, Err(TaskWorkflowError::Parse(_))));
    ensure!(service.get(created.id()).await? == created);
    Ok(())
}
