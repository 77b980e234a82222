//! Shared world state for task status transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{Project, Task},
    services::{ProjectService, TaskService, TrackerError},
};

/// Task service type used by the BDD world.
pub type TestTaskService =
    TaskService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    /// Project service under test.
    pub projects: ProjectService<InMemoryProjectRepository>,
    /// Task service under test.
    pub tasks: TestTaskService,
    /// Project created by the setup steps.
    pub project: Option<Project>,
    /// Task whose status is exercised.
    pub task: Option<Task>,
    /// Outcome of the most recent `When` transition.
    pub last_transition_result: Option<Result<Task, TrackerError>>,
}

impl TaskStatusWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let project_repository = Arc::new(InMemoryProjectRepository::new());
        Self {
            projects: ProjectService::new(Arc::clone(&project_repository)),
            tasks: TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                project_repository,
                Arc::new(DefaultClock),
            ),
            project: None,
            task: None,
            last_transition_result: None,
        }
    }

    /// Returns the identifier of the task under test as text.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.task
            .as_ref()
            .map(|task| task.id().to_string())
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
