//! Application services for project and task orchestration.
//!
//! Services are the entry point for transport adapters: they parse raw
//! request input, load entities through the repository ports, apply entity
//! operations, and persist the result.

mod error;
mod project;
mod task;
mod view;

pub use error::{ErrorClass, TrackerError, TrackerResult};
pub use project::{CreateProjectRequest, ProjectService};
pub use task::{CreateTaskRequest, TaskService, TransitionTaskRequest, UpdateTaskRequest};
pub use view::{ProjectView, TaskView};
