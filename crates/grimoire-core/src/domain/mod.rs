// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Grimoire.
//!
//! This module contains the constraint rules, the entity schemas and the
//! validated conversion between transport objects and domain models.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, logging or storage calls
//! - **Data-driven rules**: Constraints are registry rows, not code per field
//! - **Always-valid models**: A domain model can only be produced by
//!   [`create_entity`] and its setters refuse values that break a rule
//!
// Public API - what the world sees
pub mod conversion;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod schema;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use conversion::{create_entity, to_transport};
pub use entities::{
    Entity, MagicSpell, MagicSpellDto, Player, PlayerDto, PlayerMagicSpell, PlayerMagicSpellDto,
};
pub use error::{DomainError, ValidationError};
pub use ids::{Identity, MagicSpellId, PlayerId, PlayerMagicSpellId};
pub use rules::{CONSTRAINT_REGISTRY, Check, ConstraintDef};
pub use schema::{FieldViolation, Record, Schema};
pub use validation::DomainValidator;
pub use value_objects::{EntityKind, Field, FieldValue, RuleId};
