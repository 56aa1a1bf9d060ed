//! Core error types shared across the workspace.

use thiserror::Error;

/// Errors produced by core domain logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup by id came up empty.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input failed validation. `field` names the offending input field
    /// when one can be singled out.
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for an entity addressed by id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Validation error without a field attribution.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Validation error attributed to a single input field.
    pub fn validation_field(message: impl Into<String>, field: &'static str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field),
        }
    }
}
