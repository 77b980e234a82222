//! Error types for domain validation and lookup.

use super::{ProjectId, TaskId, TaskStatus};
use std::fmt;
use thiserror::Error;

/// Root of every known domain failure.
///
/// Adapters can tell a domain failure apart from an infrastructure failure
/// by matching on this type alone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A constructed or updated field broke a field-level invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested status change is not an allowed edge.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// An entity lookup by identifier yielded nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Raw input could not be interpreted (malformed id, unknown keyword).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Builds an [`DomainError::InvalidArgument`] from any displayable cause.
    pub fn invalid_argument(cause: impl fmt::Display) -> Self {
        Self::InvalidArgument(cause.to_string())
    }
}

/// Field whose text-length rule was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatedField {
    /// `Project.name`.
    ProjectName,
    /// `Task.title`.
    TaskTitle,
}

impl ValidatedField {
    /// Returns the qualified field name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectName => "Project.name",
            Self::TaskTitle => "Task.title",
        }
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text field was empty or too short after trimming.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field} must contain at least {min_chars} characters")]
pub struct ValidationError {
    field: ValidatedField,
    min_chars: usize,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    #[must_use]
    pub const fn new(field: ValidatedField, min_chars: usize) -> Self {
        Self { field, min_chars }
    }

    /// Returns the offending field.
    #[must_use]
    pub const fn field(&self) -> ValidatedField {
        self.field
    }

    /// Returns the minimum accepted length.
    #[must_use]
    pub const fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Checks `value` against the minimum length, counting characters after
    /// trimming surrounding whitespace.
    pub(crate) fn check(
        field: ValidatedField,
        value: &str,
        min_chars: usize,
    ) -> Result<(), Self> {
        if value.trim().chars().count() < min_chars {
            return Err(Self::new(field, min_chars));
        }
        Ok(())
    }
}

/// An entity was not present in its repository.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// No project with this identifier.
    #[error("project not found: {0}")]
    Project(ProjectId),

    /// No task with this identifier.
    #[error("task not found: {0}")]
    Task(TaskId),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
