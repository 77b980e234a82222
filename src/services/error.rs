//! Service-level errors and their transport-neutral classification.

use crate::{domain::DomainError, ports::RepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Message exposed to callers for failures that are not their fault.
const INTERNAL_MESSAGE: &str = "internal server error";

/// Errors returned by the services.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// A known domain failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Repository infrastructure failed.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

/// Result type for service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl From<RepositoryError> for TrackerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(not_found) => Self::Domain(DomainError::NotFound(not_found)),
            RepositoryError::Persistence(source) => Self::Persistence(source),
        }
    }
}

/// Response category an adapter should pick for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The addressed entity does not exist.
    NotFound,
    /// The request was rejected by validation or the workflow.
    BadRequest,
    /// Anything else.
    Internal,
}

impl ErrorClass {
    /// Returns the conventional HTTP status code for this class.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }
}

impl TrackerError {
    /// Returns `true` for known domain failures.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Classifies the failure for response mapping.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(DomainError::NotFound(_)) => ErrorClass::NotFound,
            Self::Domain(
                DomainError::Validation(_)
                | DomainError::InvalidStatusTransition { .. }
                | DomainError::InvalidArgument(_),
            ) => ErrorClass::BadRequest,
            Self::Persistence(_) => ErrorClass::Internal,
        }
    }

    /// Returns the message safe to show to the caller.
    ///
    /// Internal failures are reported with a generic message so that
    /// infrastructure details do not leak.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::Internal => INTERNAL_MESSAGE.to_owned(),
            ErrorClass::NotFound | ErrorClass::BadRequest => self.to_string(),
        }
    }
}
