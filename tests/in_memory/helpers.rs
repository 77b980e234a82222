//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{FixedPriority, Project, ProjectId, Task},
    services::{ProjectService, TaskService},
};

/// Task service wired to in-memory repositories.
pub type TestTaskService =
    TaskService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>;

/// Project and task services sharing one project repository.
pub struct Tracker {
    /// Project service.
    pub projects: ProjectService<InMemoryProjectRepository>,
    /// Task service.
    pub tasks: TestTaskService,
}

/// Provides services backed by fresh in-memory repositories.
#[fixture]
pub fn tracker() -> Tracker {
    let project_repository = Arc::new(InMemoryProjectRepository::new());
    Tracker {
        projects: ProjectService::new(Arc::clone(&project_repository)),
        tasks: TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            project_repository,
            Arc::new(DefaultClock),
        ),
    }
}

/// Provides a fresh in-memory project repository.
#[fixture]
pub fn project_repo() -> InMemoryProjectRepository {
    InMemoryProjectRepository::new()
}

/// Provides a fresh in-memory task repository.
#[fixture]
pub fn task_repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a valid project.
///
/// # Errors
///
/// Returns an error if `name` is rejected.
pub fn project(name: &str) -> Result<Project, eyre::Report> {
    Ok(Project::new(name)?)
}

/// Builds a valid task with a fixed score.
///
/// # Errors
///
/// Returns an error if `title` is rejected.
pub fn task(title: &str, project_id: ProjectId, score: i64) -> Result<Task, eyre::Report> {
    Ok(Task::new(
        title,
        project_id,
        Arc::new(FixedPriority::new(score)),
        None,
    )?)
}
