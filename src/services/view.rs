//! Serializable read models handed to transport adapters.

use crate::domain::{Project, Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public representation of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    /// Project identifier.
    pub id: String,
    /// Project name, as given at creation.
    pub name: String,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_owned(),
        }
    }
}

/// Public representation of a task, including its derived score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Task title.
    pub title: String,
    /// Current status.
    pub status: TaskStatus,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Priority score as of the reference date the view was built for.
    pub priority_score: i64,
}

impl TaskView {
    /// Builds the view, scoring the task as of `today`.
    #[must_use]
    pub fn new(task: &Task, today: NaiveDate) -> Self {
        Self {
            id: task.id().to_string(),
            project_id: task.project_id().to_string(),
            title: task.title().to_owned(),
            status: task.status(),
            due_date: task.due_date(),
            priority_score: task.priority_score_on(today),
        }
    }
}
