//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("command already registered: {0}")]
    DuplicateCommand(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("chat gateway error: {0}")]
    Gateway(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}
