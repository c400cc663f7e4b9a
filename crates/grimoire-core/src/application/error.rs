//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Constraint violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::{EntityKind, Field};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No stored entity has this id.
    #[error("No {entity} with id {id}")]
    NotFound { entity: EntityKind, id: String },

    /// A reference field names an entity that is not stored.
    #[error("{entity}.{field} refers to unknown id {id}")]
    DanglingReference {
        entity: EntityKind,
        field: Field,
        id: String,
    },

    /// An entity with this id is already stored.
    #[error("A {entity} with id {id} already exists")]
    DuplicateId { entity: EntityKind, id: String },

    /// Store access failed (lock poisoned).
    #[error("Entity store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { entity, id } => vec![
                format!("No {entity} is stored under {id}"),
                "Check the id printed when the record was created".into(),
            ],
            Self::DanglingReference { field, .. } => vec![
                format!("Create the entity referenced by '{field}' first"),
                "In a roster file, holdings must name declared player and spell keys".into(),
            ],
            Self::DuplicateId { .. } => {
                vec!["Identities are minted on creation; do not reuse a stored record".into()]
            }
            Self::StoreLockError => vec![
                "The entity store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::DanglingReference { .. } => ErrorCategory::NotFound,
            Self::DuplicateId { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_reference_names_the_field() {
        let err = ApplicationError::DanglingReference {
            entity: EntityKind::PlayerMagicSpell,
            field: Field::PlayerId,
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "playerMagicSpell.playerId refers to unknown id abc");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
