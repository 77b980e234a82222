//! In-memory repositories for tests and single-process deployments.

mod project;
mod task;

pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;

use crate::ports::RepositoryError;

/// Maps a poisoned lock into a persistence error.
fn poisoned(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}
