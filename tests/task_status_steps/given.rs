//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async, scenario_date};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::task::services::TaskInput;

#[given(r#"today is "{day}""#)]
fn today_is(world: &mut TaskStatusWorld, day: String) -> Result<(), eyre::Report> {
    world.clock.set_day(scenario_date(&day)?);
    Ok(())
}

#[given(r#"a task titled "{title}" exists"#)]
fn task_exists(world: &mut TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(TaskInput::new(title)))
        .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}

#[given("the task has been completed")]
fn task_has_been_completed(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let completed =
        run_async(world.service.complete(id)).wrap_err("complete task in scenario setup")?;
    world.last_task = Some(completed);
    Ok(())
}
