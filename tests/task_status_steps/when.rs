//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use taskflow::task::services::TaskInput;

#[when(r#"a task titled "{title}" is created"#)]
fn task_is_created(world: &mut TaskStatusWorld, title: String) {
    let result = run_async(world.service.create(TaskInput::new(title)));
    world.record(result);
}

#[when("the task is completed")]
fn task_is_completed(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let result = run_async(world.service.complete(id));
    world.record(result);
    Ok(())
}

#[when("the task is reopened")]
fn task_is_reopened(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let result = run_async(world.service.uncomplete(id));
    world.record(result);
    Ok(())
}

#[when(r#"the task is renamed to "{title}""#)]
fn task_is_renamed(world: &mut TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let result = run_async(world.service.update(id, TaskInput::new(title)));
    world.record(result);
    Ok(())
}
