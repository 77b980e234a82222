//! Service layer for task creation, updates, and status transitions.

use crate::{
    domain::{
        DomainError, PriorityConfig, PriorityConfigError, ProjectId, Task, TaskId, TaskKind,
        TaskStatus,
    },
    ports::{ProjectRepository, TaskFilter, TaskRepository},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{TaskView, TrackerResult};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: String,
    title: String,
    kind: String,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// `kind` is one of `bug`, `feature` or `chore` and selects the priority
    /// strategy.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        title: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            title: title.into(),
            kind: kind.into(),
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial task update.
///
/// Fields left unset are not touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: String,
    title: Option<String>,
    due_date: Option<Option<NaiveDate>>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for `task_id`.
    #[must_use]
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            title: None,
            due_date: None,
            status: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the due date; `None` clears it.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Requests a status transition.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: String,
    target_status: String,
}

impl TransitionTaskRequest {
    /// Creates a request moving `task_id` to `target_status`.
    #[must_use]
    pub fn new(task_id: impl Into<String>, target_status: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            target_status: target_status.into(),
        }
    }
}

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    clock: Arc<C>,
    config: PriorityConfig,
}

impl<T, P, C> TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default priority configuration.
    #[must_use]
    pub fn new(tasks: Arc<T>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            clock,
            config: PriorityConfig::default(),
        }
    }

    /// Creates a service with a custom priority configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`PriorityConfig::validate`] error when `config` does not
    /// describe a usable scoring curve.
    pub fn with_config(
        tasks: Arc<T>,
        projects: Arc<P>,
        clock: Arc<C>,
        config: PriorityConfig,
    ) -> Result<Self, PriorityConfigError> {
        config.validate().inspect_err(|err| {
            warn!(error = %err, "priority configuration rejected");
        })?;
        Ok(Self {
            tasks,
            projects,
            clock,
            config,
        })
    }

    /// Returns the priority configuration new tasks are scored with.
    #[must_use]
    pub const fn config(&self) -> &PriorityConfig {
        &self.config
    }

    /// Creates a task in an existing project.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a malformed project id or
    /// unknown kind, a not-found error when the project does not exist, a
    /// validation error for a short title, and a persistence error when a
    /// repository fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TrackerResult<Task> {
        let project_id = ProjectId::parse(&request.project_id)?;
        let kind = TaskKind::try_from(request.kind.as_str())?;
        let project = self.projects.get(project_id).await?;

        let task = Task::new(
            request.title,
            project.id(),
            kind.strategy(&self.config),
            request.due_date,
        )
        .inspect_err(|err| {
            warn!(%project_id, error = %err, "task creation rejected");
        })?;
        self.tasks.save(&task).await?;
        info!(task_id = %task.id(), %project_id, kind = %kind, "task created");
        Ok(task)
    }

    /// Loads a task by its textual identifier.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a malformed id and a not-found
    /// error when no task matches.
    pub async fn get_task(&self, id: &str) -> TrackerResult<Task> {
        let task_id = TaskId::parse(id)?;
        debug!(%task_id, "loading task");
        Ok(self.tasks.get(task_id).await?)
    }

    /// Returns the tasks accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the repository fails.
    pub async fn list_tasks(&self, filter: TaskFilter) -> TrackerResult<Vec<Task>> {
        Ok(self.tasks.list(&filter).await?)
    }

    /// Returns the tasks of one project.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a malformed id and a not-found
    /// error when the project does not exist.
    pub async fn list_project_tasks(&self, project_id: &str) -> TrackerResult<Vec<Task>> {
        let project = self.projects.get(ProjectId::parse(project_id)?).await?;
        self.list_tasks(TaskFilter::new().with_project(project.id()))
            .await
    }

    /// Applies a partial update.
    ///
    /// Changes are applied to a copy in the order title, due date, status,
    /// and stored only if all of them succeed.
    ///
    /// # Errors
    ///
    /// Returns the first failing change (validation, invalid transition,
    /// invalid argument), a not-found error, or a persistence error. Nothing
    /// is stored on failure.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TrackerResult<Task> {
        let task_id = TaskId::parse(&request.task_id)?;
        let target_status = request
            .status
            .as_deref()
            .map(parse_status)
            .transpose()?;

        let mut task = self.tasks.get(task_id).await?;
        let outcome = apply_update(&mut task, request.title, request.due_date, target_status);
        if let Err(err) = outcome {
            warn!(%task_id, error = %err, "task update rejected");
            return Err(err.into());
        }

        self.tasks.save(&task).await?;
        info!(%task_id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Moves a task to another status.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a malformed id or unknown
    /// status, a not-found error, [`DomainError::InvalidStatusTransition`]
    /// for a disallowed edge, or a persistence error.
    pub async fn transition_task(&self, request: TransitionTaskRequest) -> TrackerResult<Task> {
        let task_id = TaskId::parse(&request.task_id)?;
        let target = parse_status(&request.target_status)?;

        let mut task = self.tasks.get(task_id).await?;
        let previous = task.status();
        task.transition_to(target).inspect_err(|err| {
            warn!(%task_id, error = %err, "status transition rejected");
        })?;

        if previous != target {
            self.tasks.save(&task).await?;
            info!(%task_id, from = %previous, to = %target, "task status changed");
        }
        Ok(task)
    }

    /// Builds the public view of `task`, scored as of the clock's date.
    #[must_use]
    pub fn view(&self, task: &Task) -> TaskView {
        TaskView::new(task, self.clock.utc().date_naive())
    }
}

fn parse_status(raw: &str) -> Result<TaskStatus, DomainError> {
    TaskStatus::try_from(raw).map_err(DomainError::invalid_argument)
}

fn apply_update(
    task: &mut Task,
    title: Option<String>,
    due_date: Option<Option<NaiveDate>>,
    status: Option<TaskStatus>,
) -> Result<(), DomainError> {
    if let Some(new_title) = title {
        task.update_title(new_title)?;
    }
    if let Some(new_due_date) = due_date {
        task.update_due_date(new_due_date);
    }
    if let Some(new_status) = status {
        task.transition_to(new_status)?;
    }
    Ok(())
}
