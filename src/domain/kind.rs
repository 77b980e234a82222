//! Task kinds and the priority strategy each one is created with.

use super::{
    BoostedPriority, DomainError, DueDateUrgency, FixedPriority, PriorityConfig, PriorityStrategy,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Category of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Defect fix; urgency plus a fixed boost.
    Bug,
    /// New functionality; plain due-date urgency.
    Feature,
    /// Maintenance work; flat score.
    Chore,
}

impl TaskKind {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Chore => "chore",
        }
    }

    /// Builds the priority strategy for tasks of this kind.
    #[must_use]
    pub fn strategy(self, config: &PriorityConfig) -> Arc<dyn PriorityStrategy> {
        match self {
            Self::Bug => Arc::new(BoostedPriority::new(
                Arc::new(DueDateUrgency::new(config)),
                config.bug_boost,
                config.max_score,
            )),
            Self::Feature => Arc::new(DueDateUrgency::new(config)),
            Self::Chore => Arc::new(FixedPriority::new(config.chore_score)),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "chore" => Ok(Self::Chore),
            _ => Err(DomainError::invalid_argument(format!(
                "task kind '{value}', expected bug, feature or chore"
            ))),
        }
    }
}
