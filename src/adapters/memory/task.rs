//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::poisoned;
use crate::{
    domain::{NotFoundError, Task, TaskId},
    ports::{RepositoryResult, TaskFilter, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get(&self, id: TaskId) -> RepositoryResult<Task> {
        let state = self.state.read().map_err(poisoned)?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| NotFoundError::Task(id).into())
    }

    async fn save(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.insert(task.id(), task.clone()).is_none() {
            state.order.push(task.id());
        }
        Ok(())
    }

    async fn list(&self, filter: &TaskFilter) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }
}
