//! # DomainError
//!
//! Centralized error handling for the Solace core.
//! Every mutation either applies fully or fails with one of these variants;
//! nothing here is fatal to the process.

use thiserror::Error;

/// The primary error type for all domain and service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Target id does not resolve to a live entity (e.g., stale reaction click)
    #[error("{entity} not found with ID {id}")]
    NotFound { entity: &'static str, id: String },

    /// Blank required text, mood score out of range, unknown lookup key
    #[error("validation error: {0}")]
    Validation(String),

    /// An id is already taken inside its owning collection
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A specialized Result type for Solace logic.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Rejects empty or whitespace-only input for a required text field.
///
/// The text itself is returned untouched; only the emptiness check trims.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
