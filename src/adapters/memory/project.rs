//! In-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::poisoned;
use crate::{
    domain::{NotFoundError, Project, ProjectId},
    ports::{ProjectRepository, RepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    order: Vec<ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get(&self, id: ProjectId) -> RepositoryResult<Project> {
        let state = self.state.read().map_err(poisoned)?;
        state
            .projects
            .get(&id)
            .cloned()
            .ok_or_else(|| NotFoundError::Project(id).into())
    }

    async fn save(&self, project: &Project) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state
            .projects
            .insert(project.id(), project.clone())
            .is_none()
        {
            state.order.push(project.id());
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.projects.get(id).cloned())
            .collect())
    }
}
