//! Task entity and its status workflow.

use super::{
    DomainError, MIN_TEXT_CHARS, PriorityContext, PriorityStrategy, ProjectId, TaskId, TaskStatus,
    ValidatedField, ValidationError,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// A unit of work inside a project.
///
/// The status is private: [`Task::transition_to`] is the only way to change
/// it. The priority score is never stored; it is recomputed from the
/// strategy and the current due date on every read.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    strategy: Arc<dyn PriorityStrategy>,
}

impl Task {
    /// Creates a task in [`TaskStatus::Todo`] with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the title has fewer than
    /// [`MIN_TEXT_CHARS`] characters after trimming.
    pub fn new(
        title: impl Into<String>,
        project_id: ProjectId,
        strategy: Arc<dyn PriorityStrategy>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        let validated_title = title.into();
        ValidationError::check(ValidatedField::TaskTitle, &validated_title, MIN_TEXT_CHARS)?;
        Ok(Self {
            id: TaskId::new(),
            project_id,
            title: validated_title,
            status: TaskStatus::Todo,
            due_date,
            strategy,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority strategy chosen at creation.
    #[must_use]
    pub fn strategy(&self) -> &dyn PriorityStrategy {
        self.strategy.as_ref()
    }

    /// Builds the scoring context for `today` from the current state.
    #[must_use]
    pub const fn priority_context(&self, today: NaiveDate) -> PriorityContext {
        PriorityContext::new(self.due_date, today)
    }

    /// Computes the priority score as of `today`.
    #[must_use]
    pub fn priority_score_on(&self, today: NaiveDate) -> i64 {
        self.strategy.compute(&self.priority_context(today))
    }

    /// Computes the priority score as of the clock's current UTC date.
    #[must_use]
    pub fn priority_score(&self, clock: &impl Clock) -> i64 {
        self.priority_score_on(clock.utc().date_naive())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] under the same rule as
    /// [`Task::new`]; the previous title is kept.
    pub fn update_title(&mut self, new_title: impl Into<String>) -> Result<(), DomainError> {
        let candidate = new_title.into();
        ValidationError::check(ValidatedField::TaskTitle, &candidate, MIN_TEXT_CHARS)?;
        self.title = candidate;
        Ok(())
    }

    /// Replaces or clears the due date.
    pub const fn update_due_date(&mut self, new_due_date: Option<NaiveDate>) {
        self.due_date = new_due_date;
    }

    /// Moves the task to `new_status`.
    ///
    /// Requesting the current status succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStatusTransition`] when `new_status` is
    /// not reachable from the current status; the status is left unchanged.
    pub fn transition_to(&mut self, new_status: TaskStatus) -> Result<(), DomainError> {
        if new_status == self.status {
            return Ok(());
        }
        if !self.status.can_transition_to(new_status) {
            return Err(DomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: new_status,
            });
        }
        self.status = new_status;
        Ok(())
    }
}

/// Tasks are equal when their stored fields match. Strategies compare by
/// [`PriorityStrategy::name`], so two tasks with differently tuned strategies
/// of the same kind are equal; compare [`Task::priority_score_on`] to tell
/// them apart.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.project_id == other.project_id
            && self.title == other.title
            && self.status == other.status
            && self.due_date == other.due_date
            && self.strategy.name() == other.strategy.name()
    }
}

impl Eq for Task {}
