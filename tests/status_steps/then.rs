//! Then steps for task status transition BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{
    domain::{DomainError, TaskStatus},
    services::TrackerError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task_id = world.task_id()?;
    let stored = run_async(world.tasks.get_task(&task_id))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the transition fails with an invalid status transition error")]
fn transition_fails_with_invalid_status_transition(
    world: &TaskStatusWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TrackerError::Domain(
            DomainError::InvalidStatusTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the transition fails with an invalid argument error")]
fn transition_fails_with_invalid_argument(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TrackerError::Domain(DomainError::InvalidArgument(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidArgument error, got {result:?}"));
    }
    Ok(())
}
