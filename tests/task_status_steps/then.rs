//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, scenario_date};
use rstest_bdd_macros::then;
use taskflow::task::{
    domain::{TaskDomainError, TaskPriority, TaskStatus},
    services::{TaskWorkflowError, ValidationError},
};

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title '{title}', found '{}'",
        task.title()
    );
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.current_task()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority_is(world: &TaskStatusWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let task = world.current_task()?;
    eyre::ensure!(
        task.priority() == expected,
        "expected priority {expected}, found {}",
        task.priority()
    );
    Ok(())
}

#[then(r#"the task deadline is "{day}""#)]
fn task_deadline_is(world: &TaskStatusWorld, day: String) -> Result<(), eyre::Report> {
    let expected = scenario_date(&day)?;
    let task = world.current_task()?;
    eyre::ensure!(
        task.deadline() == Some(expected),
        "expected deadline {expected}, found {:?}",
        task.deadline()
    );
    Ok(())
}

#[then("the request fails with a title too short error")]
fn request_fails_with_short_title(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing workflow result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskWorkflowError::Validation(ValidationError::Domain(
                TaskDomainError::TitleTooShort { .. }
            )))
        ),
        "expected TitleTooShort error, got {result:?}"
    );
    Ok(())
}

#[then("the request fails with a deadline parse error")]
fn request_fails_with_parse_error(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing workflow result"))?;
    eyre::ensure!(
        matches!(result, Err(TaskWorkflowError::Parse(_))),
        "expected deadline parse error, got {result:?}"
    );
    Ok(())
}
