//! Pluggable priority scoring.
//!
//! A [`PriorityStrategy`] turns a [`PriorityContext`] into an integer score.
//! Tasks hold a strategy behind the trait and never look at its concrete
//! type, so new policies can be introduced without touching the entity.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use taskboard::domain::{DueDateUrgency, PriorityConfig, PriorityContext, PriorityStrategy};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("invalid date")?;
//! let urgency = DueDateUrgency::new(&PriorityConfig::default());
//!
//! let undated = PriorityContext::new(None, today);
//! let due_today = PriorityContext::new(Some(today), today);
//! assert!(urgency.compute(&due_today) > urgency.compute(&undated));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Inputs available to a priority strategy.
///
/// The reference date travels with the context so that
/// [`PriorityStrategy::compute`] stays a pure function of its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriorityContext {
    due_date: Option<NaiveDate>,
    today: NaiveDate,
}

impl PriorityContext {
    /// Creates a scoring context.
    #[must_use]
    pub const fn new(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self { due_date, today }
    }

    /// Returns the task due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the reference date the score is computed for.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the signed number of days from `today` to the due date.
    ///
    /// Negative values mean the task is overdue.
    #[must_use]
    pub fn days_until_due(&self) -> Option<i64> {
        self.due_date
            .map(|due_date| due_date.signed_duration_since(self.today).num_days())
    }
}

/// Scoring policy used to derive a task's priority.
pub trait PriorityStrategy: fmt::Debug + Send + Sync {
    /// Short stable name of the policy.
    fn name(&self) -> &'static str;

    /// Computes the score for `context`.
    ///
    /// Implementations must not keep state between calls.
    fn compute(&self, context: &PriorityContext) -> i64;
}

/// Tunable constants for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Score for tasks without a due date or with a distant one.
    pub baseline: i64,
    /// Number of days before the due date at which urgency starts rising.
    pub horizon_days: i64,
    /// Score added per day inside the horizon.
    pub daily_step: i64,
    /// Score added per day past the due date.
    pub overdue_daily_step: i64,
    /// Upper bound for every computed score.
    pub max_score: i64,
    /// Extra score granted to bugs.
    pub bug_boost: i64,
    /// Flat score for chores.
    pub chore_score: i64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            baseline: 10,
            horizon_days: 14,
            daily_step: 5,
            overdue_daily_step: 10,
            max_score: 200,
            bug_boost: 50,
            chore_score: 5,
        }
    }
}

impl PriorityConfig {
    /// Parses a configuration from JSON, filling missing fields with their
    /// defaults, and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityConfigError::Parse`] for malformed JSON and the
    /// errors of [`PriorityConfig::validate`] for inconsistent values.
    pub fn from_json(raw: &str) -> Result<Self, PriorityConfigError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| PriorityConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the constants describe a usable scoring curve.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityConfigError::NonPositiveHorizon`] when
    /// `horizon_days <= 0`, [`PriorityConfigError::NegativeStep`] when a step
    /// is negative, and [`PriorityConfigError::MaxBelowBaseline`] when
    /// `max_score < baseline`.
    pub const fn validate(&self) -> Result<(), PriorityConfigError> {
        if self.horizon_days <= 0 {
            return Err(PriorityConfigError::NonPositiveHorizon(self.horizon_days));
        }
        if self.daily_step < 0 || self.overdue_daily_step < 0 {
            return Err(PriorityConfigError::NegativeStep);
        }
        if self.max_score < self.baseline {
            return Err(PriorityConfigError::MaxBelowBaseline {
                max_score: self.max_score,
                baseline: self.baseline,
            });
        }
        Ok(())
    }
}

/// Errors raised while loading a [`PriorityConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriorityConfigError {
    /// The JSON document could not be decoded.
    #[error("invalid priority configuration: {0}")]
    Parse(String),

    /// The urgency horizon must be at least one day.
    #[error("horizon_days must be positive, got {0}")]
    NonPositiveHorizon(i64),

    /// Daily steps must not lower the score.
    #[error("daily steps must not be negative")]
    NegativeStep,

    /// The cap is lower than the floor.
    #[error("max_score {max_score} is below baseline {baseline}")]
    MaxBelowBaseline {
        /// Configured cap.
        max_score: i64,
        /// Configured floor.
        baseline: i64,
    },
}

/// Urgency rises as the due date approaches and keeps rising once it has
/// passed. Tasks without a due date score the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateUrgency {
    baseline: i64,
    horizon_days: i64,
    daily_step: i64,
    overdue_daily_step: i64,
    max_score: i64,
}

impl DueDateUrgency {
    /// Creates the strategy from the urgency fields of `config`.
    ///
    /// Negative steps are read as zero and the horizon as at least one day,
    /// so the score never falls as the due date approaches or passes.
    #[must_use]
    pub fn new(config: &PriorityConfig) -> Self {
        Self {
            baseline: config.baseline,
            horizon_days: config.horizon_days.max(1),
            daily_step: config.daily_step.max(0),
            overdue_daily_step: config.overdue_daily_step.max(0),
            max_score: config.max_score,
        }
    }
}

impl PriorityStrategy for DueDateUrgency {
    fn name(&self) -> &'static str {
        "due_date_urgency"
    }

    fn compute(&self, context: &PriorityContext) -> i64 {
        let Some(days_left) = context.days_until_due() else {
            return self.baseline;
        };

        let raw = if days_left >= self.horizon_days {
            self.baseline
        } else if days_left >= 0 {
            let days_inside = self.horizon_days.saturating_sub(days_left);
            self.baseline
                .saturating_add(days_inside.saturating_mul(self.daily_step))
        } else {
            let at_due = self
                .baseline
                .saturating_add(self.horizon_days.saturating_mul(self.daily_step));
            let days_overdue = days_left.saturating_neg();
            at_due.saturating_add(days_overdue.saturating_mul(self.overdue_daily_step))
        };
        raw.min(self.max_score)
    }
}

/// Constant score regardless of context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPriority {
    score: i64,
}

impl FixedPriority {
    /// Creates a strategy that always yields `score`.
    #[must_use]
    pub const fn new(score: i64) -> Self {
        Self { score }
    }
}

impl PriorityStrategy for FixedPriority {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn compute(&self, _context: &PriorityContext) -> i64 {
        self.score
    }
}

/// Adds a fixed boost on top of another strategy.
#[derive(Debug, Clone)]
pub struct BoostedPriority {
    inner: Arc<dyn PriorityStrategy>,
    boost: i64,
    max_score: i64,
}

impl BoostedPriority {
    /// Wraps `inner`, adding `boost` and capping the sum at `max_score`.
    #[must_use]
    pub fn new(inner: Arc<dyn PriorityStrategy>, boost: i64, max_score: i64) -> Self {
        Self {
            inner,
            boost,
            max_score,
        }
    }
}

impl PriorityStrategy for BoostedPriority {
    fn name(&self) -> &'static str {
        "boosted"
    }

    fn compute(&self, context: &PriorityContext) -> i64 {
        self.inner
            .compute(context)
            .saturating_add(self.boost)
            .min(self.max_score)
    }
}
