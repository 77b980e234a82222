//! When steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::services::TransitionTaskRequest;

#[when(r#"the task is transitioned to "{target_status}""#)]
fn transition_task(
    world: &mut TaskStatusWorld,
    target_status: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let result = run_async(
        world
            .tasks
            .transition_task(TransitionTaskRequest::new(task_id, target_status)),
    );
    world.last_transition_result = Some(result);
    Ok(())
}
