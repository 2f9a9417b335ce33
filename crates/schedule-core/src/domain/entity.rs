//! Domain Layer - Core Entity Trait
//!
//! Basic contract for domain entities and the shared error type.

use thiserror::Error;

use super::draft::FormField;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more required form fields were blank
    #[error("Empty Fields are not allowed")]
    EmptyFields { missing: Vec<FormField> },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

impl DomainError {
    pub fn is_empty_fields(&self) -> bool {
        matches!(self, DomainError::EmptyFields { .. })
    }
}
