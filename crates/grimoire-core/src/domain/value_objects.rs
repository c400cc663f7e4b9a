//! Domain value objects: EntityKind, Field, RuleId, FieldValue.
//!
//! # Design
//!
//! These are pure value types, `Copy` and equality-by-value. They hold NO
//! constraint logic. Every rule lives in `rules.rs`. This file defines the
//! closed vocabularies, their wire names and their `FromStr` parsers.
//!
//! # Adding a New Field
//!
//! 1. Add the `Field` variant and its `as_str` / `value_type` arms here
//! 2. List it in the owning entity's schema in `schema.rs`
//! 3. Optionally register constraints for it in `rules.rs`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

// ── EntityKind ───────────────────────────────────────────────────────────────

/// The entity families known to the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Player,
    MagicSpell,
    PlayerMagicSpell,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Player, Self::MagicSpell, Self::PlayerMagicSpell];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::MagicSpell => "magicSpell",
            Self::PlayerMagicSpell => "playerMagicSpell",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "player" => Ok(Self::Player),
            "magicspell" | "spell" => Ok(Self::MagicSpell),
            "playermagicspell" | "holding" => Ok(Self::PlayerMagicSpell),
            _ => Err(DomainError::UnknownName {
                kind: "entity",
                value: s.to_string(),
            }),
        }
    }
}

// ── Field ────────────────────────────────────────────────────────────────────

/// Every field name that appears in any entity schema.
///
/// The `as_str` form is the camelCase wire name, which is also the name used
/// in constraint descriptions (`length(firstName) >= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    // Player
    FirstName,
    LastName,
    ExperiencePoints,
    Level,
    Health,
    MagicEnergy,
    Coins,
    // MagicSpell
    Name,
    CastEnergy,
    Price,
    Weight,
    // PlayerMagicSpell
    PlayerId,
    MagicSpellId,
    RemainingCasts,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::ExperiencePoints => "experiencePoints",
            Self::Level => "level",
            Self::Health => "health",
            Self::MagicEnergy => "magicEnergy",
            Self::Coins => "coins",
            Self::Name => "name",
            Self::CastEnergy => "castEnergy",
            Self::Price => "price",
            Self::Weight => "weight",
            Self::PlayerId => "playerId",
            Self::MagicSpellId => "magicSpellId",
            Self::RemainingCasts => "remainingCasts",
        }
    }

    /// The kind of value this field carries.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Id | Self::PlayerId | Self::MagicSpellId => ValueType::Id,
            Self::FirstName | Self::LastName | Self::Name => ValueType::Text,
            Self::ExperiencePoints
            | Self::Level
            | Self::Health
            | Self::MagicEnergy
            | Self::Coins
            | Self::CastEnergy
            | Self::Price
            | Self::Weight
            | Self::RemainingCasts => ValueType::Integer,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RuleId ───────────────────────────────────────────────────────────────────

/// Stable identifiers for constraint rules.
///
/// The string form is what callers match on when mapping a violation to an
/// external response, so it must never change for an existing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "correctLength")]
    CorrectLength,
    #[serde(rename = "levelValue")]
    LevelValue,
}

impl RuleId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CorrectLength => "correctLength",
            Self::LevelValue => "levelValue",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correctLength" => Ok(Self::CorrectLength),
            "levelValue" => Ok(Self::LevelValue),
            other => Err(DomainError::UnknownName {
                kind: "rule",
                value: other.to_string(),
            }),
        }
    }
}

// ── FieldValue ───────────────────────────────────────────────────────────────

/// Shape of a field's value, used to keep the rule registry type-consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Integer,
    Id,
}

/// A borrowed view of one field's current or candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Id(Uuid),
}

impl FieldValue<'_> {
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Integer(_) => ValueType::Integer,
            Self::Id(_) => ValueType::Id,
        }
    }
}

/// Conversion from a stored field to the view the rule registry evaluates.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for i32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(i64::from(*self))
    }
}

impl AsFieldValue for i64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self)
    }
}

impl AsFieldValue for Uuid {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Id(*self)
    }
}
