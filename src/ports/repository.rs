//! Repository ports for project and task persistence.
//!
//! Implementations must serialize access per entity: two concurrent `save`
//! calls for the same identifier may not interleave. Entities do no locking
//! of their own.

use crate::domain::{NotFoundError, Project, ProjectId, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Loads a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the project does not exist.
    async fn get(&self, id: ProjectId) -> RepositoryResult<Project>;

    /// Inserts or replaces a project.
    async fn save(&self, project: &Project) -> RepositoryResult<()>;

    /// Returns every stored project in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<Project>>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Loads a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the task does not exist.
    async fn get(&self, id: TaskId) -> RepositoryResult<Task>;

    /// Inserts or replaces a task.
    async fn save(&self, task: &Task) -> RepositoryResult<()>;

    /// Returns the stored tasks accepted by `filter`, in insertion order.
    async fn list(&self, filter: &TaskFilter) -> RepositoryResult<Vec<Task>>;
}

/// Criteria for [`TaskRepository::list`]. An empty filter accepts every
/// task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    project_id: Option<ProjectId>,
    status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Creates a filter accepting every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to tasks of `project_id`.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts the filter to tasks in `status`.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the project restriction, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when `task` satisfies every restriction.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id.is_none_or(|id| id == task.project_id())
            && self.status.is_none_or(|status| status == task.status())
    }
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The requested entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
