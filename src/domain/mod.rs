//! Domain model for project and task tracking.
//!
//! Entities enforce their own invariants and report failures through
//! [`DomainError`]. Nothing in this module performs I/O, locking, or logging.

mod error;
mod ids;
mod kind;
mod priority;
mod project;
mod status;
mod task;

pub use error::{
    DomainError, NotFoundError, ParseTaskStatusError, ValidatedField, ValidationError,
};
pub use ids::{ProjectId, TaskId};
pub use kind::TaskKind;
pub use priority::{
    BoostedPriority, DueDateUrgency, FixedPriority, PriorityConfig, PriorityConfigError,
    PriorityContext, PriorityStrategy,
};
pub use project::Project;
pub use status::TaskStatus;
pub use task::Task;

/// Minimum number of characters (after trimming) for project names and task
/// titles.
pub const MIN_TEXT_CHARS: usize = 5;
