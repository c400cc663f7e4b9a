// ============================================================================
// domain/error.rs - VALIDATION AND DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{EntityKind, Field, RuleId};
use crate::error::ErrorCategory;

/// A transport object failed a field constraint during creation.
///
/// Carries the first violated rule of the first invalid field, in schema
/// order. The `description` is the rule's precomputed constraint text, so a
/// boundary can hand it to a caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The constraint was not met: {description}")]
pub struct ValidationError {
    pub entity: EntityKind,
    pub field: Field,
    pub rule: RuleId,
    pub description: String,
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    #[error("Unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(err) => vec![
                format!("Field '{}' failed rule '{}'", err.field, err.rule),
                format!("Required: {}", err.description),
                "Run: grimoire check to list every violation at once".into(),
            ],
            Self::UnknownName { kind, value } => vec![
                format!("'{value}' is not a known {kind}"),
                "Try: grimoire rules to see registered entities and rules".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::UnknownName { .. } => ErrorCategory::Validation,
        }
    }

    /// The rule id carried by a validation failure, if any.
    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Self::Validation(err) => Some(err.rule),
            Self::UnknownName { .. } => None,
        }
    }
}
