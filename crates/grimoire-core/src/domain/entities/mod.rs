//! Domain entities and their transport twins.
//!
//! Every entity file defines two types against one [`Schema`]:
//!
//! - the **transport object** (`PlayerDto`, ...): public fields, serde
//!   derives, no enforcement beyond on-demand violation queries;
//! - the **domain model** (`Player`, ...): private fields, guarded setters,
//!   and an identity that only [`create_entity`] can mint.
//!
//! [`Schema`]: crate::domain::schema::Schema
//! [`create_entity`]: crate::domain::conversion::create_entity

pub mod magic_spell;
pub mod player;
pub mod player_magic_spell;

pub use magic_spell::{MagicSpell, MagicSpellDto};
pub use player::{Player, PlayerDto};
pub use player_magic_spell::{PlayerMagicSpell, PlayerMagicSpellDto};

use crate::domain::{
    ids::Identity,
    rules,
    schema::Record,
    value_objects::{AsFieldValue, EntityKind, Field},
};

#[doc(hidden)]
pub mod sealed {
    /// Proof that a call originates inside this crate.
    ///
    /// Outside crates can name it but never construct it, so they cannot call
    /// [`super::Entity::materialize`] and bypass validated creation.
    pub struct Token(());

    impl Token {
        pub(crate) const fn new() -> Self {
            Self(())
        }
    }
}

/// A domain model with a transport twin and a minted identity.
///
/// Models are plain owned values, so they can be moved into shared stores.
pub trait Entity: Record + Clone + Send + Sync + 'static {
    type Id: Identity;
    type Dto: Record + Clone + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    /// Project to the transport form. Copies every field, identity included.
    fn to_dto(&self) -> Self::Dto;

    /// Build the model from an already-validated transport object.
    #[doc(hidden)]
    fn materialize(dto: &Self::Dto, id: Self::Id, token: sealed::Token) -> Self;
}

/// Outcome of a guarded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    Applied,
    Rejected,
}

/// Write `value` into `slot` only if it satisfies every rule for the field.
///
/// A rejected value leaves `slot` untouched.
pub(crate) fn guarded_set<T: AsFieldValue>(
    slot: &mut T,
    value: T,
    entity: EntityKind,
    field: Field,
) -> Mutation {
    if rules::accepts(entity, field, value.as_field_value()) {
        *slot = value;
        Mutation::Applied
    } else {
        Mutation::Rejected
    }
}
