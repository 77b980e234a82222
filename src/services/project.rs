//! Service layer for project creation and lookup.

use crate::{
    domain::{Project, ProjectId},
    ports::ProjectRepository,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::TrackerResult;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
}

impl CreateProjectRequest {
    /// Creates a request for a project called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`super::TrackerError::Domain`] when the name is rejected and
    /// [`super::TrackerError::Persistence`] when the repository fails.
    pub async fn create_project(&self, request: CreateProjectRequest) -> TrackerResult<Project> {
        let project = Project::new(request.name).inspect_err(|err| {
            warn!(error = %err, "project creation rejected");
        })?;
        self.repository.save(&project).await?;
        info!(project_id = %project.id(), "project created");
        Ok(project)
    }

    /// Loads a project by its textual identifier.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for a malformed id and a not-found
    /// error when no project matches.
    pub async fn get_project(&self, id: &str) -> TrackerResult<Project> {
        let project_id = ProjectId::parse(id)?;
        debug!(%project_id, "loading project");
        Ok(self.repository.get(project_id).await?)
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`super::TrackerError::Persistence`] when the repository fails.
    pub async fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }
}
