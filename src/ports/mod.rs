//! Port contracts for project and task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod repository;

pub use repository::{
    ProjectRepository, RepositoryError, RepositoryResult, TaskFilter, TaskRepository,
};
