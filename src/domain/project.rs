//! Project entity.

use super::{DomainError, MIN_TEXT_CHARS, ProjectId, ValidatedField, ValidationError};

/// A named container for tasks.
///
/// The name is validated once at construction and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
}

impl Project {
    /// Creates a project with a fresh identifier.
    ///
    /// The name is stored exactly as given; trimming only applies to the
    /// length check.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the name has fewer than
    /// [`MIN_TEXT_CHARS`] characters after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let name = value.into();
        ValidationError::check(ValidatedField::ProjectName, &name, MIN_TEXT_CHARS)?;
        Ok(Self {
            id: ProjectId::new(),
            name,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
