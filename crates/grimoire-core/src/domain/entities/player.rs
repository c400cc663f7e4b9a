//! The `Player` entity and its transport twin.
//!
//! # Invariants (domain side)
//!
//! - `first_name` has 1 to 15 UTF-16 code units
//! - `last_name` has 3 to 20 UTF-16 code units
//! - `level` is at most 12
//!
//! These hold for every `Player` value at all times: the only constructor is
//! validated creation, and every setter re-checks its field and silently
//! keeps the previous value when the candidate fails.
//!
//! Negative levels and negative experience, coins or health are accepted.
//! No rule forbids them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Entity, guarded_set, sealed::Token},
    ids::PlayerId,
    rules,
    schema::{self, PLAYER_SCHEMA, Record, Schema},
    value_objects::{AsFieldValue, EntityKind, Field, FieldValue, RuleId},
};

// ── Transport ────────────────────────────────────────────────────────────────

/// Boundary-facing player record.
///
/// Any values may be stored here. Use the `*_violations` queries or
/// [`schema::all_violations`] before submitting it for creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PlayerId>,
    pub first_name: String,
    pub last_name: String,
    pub experience_points: i64,
    pub level: i32,
    pub health: i32,
    pub magic_energy: i32,
    pub coins: i64,
}

impl PlayerDto {
    /// A record with the three constrained fields set and everything else zero.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, level: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            level,
            ..Self::default()
        }
    }

    pub fn first_name_violations(&self) -> Vec<RuleId> {
        schema::violations(self, Field::FirstName)
    }

    pub fn last_name_violations(&self) -> Vec<RuleId> {
        schema::violations(self, Field::LastName)
    }

    pub fn level_violations(&self) -> Vec<RuleId> {
        schema::violations(self, Field::Level)
    }
}

impl Record for PlayerDto {
    const SCHEMA: &'static Schema = &PLAYER_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => self.id.map(|id| FieldValue::Id(id.to_uuid())),
            Field::FirstName => Some(self.first_name.as_field_value()),
            Field::LastName => Some(self.last_name.as_field_value()),
            Field::ExperiencePoints => Some(self.experience_points.as_field_value()),
            Field::Level => Some(self.level.as_field_value()),
            Field::Health => Some(self.health.as_field_value()),
            Field::MagicEnergy => Some(self.magic_energy.as_field_value()),
            Field::Coins => Some(self.coins.as_field_value()),
            _ => None,
        }
    }
}

// ── Domain ───────────────────────────────────────────────────────────────────

/// A player in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    first_name: String,
    last_name: String,
    experience_points: i64,
    level: i32,
    health: i32,
    magic_energy: i32,
    coins: i64,
}

impl Player {
    const KIND: EntityKind = EntityKind::Player;

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub const fn experience_points(&self) -> i64 {
        self.experience_points
    }

    pub const fn level(&self) -> i32 {
        self.level
    }

    pub const fn health(&self) -> i32 {
        self.health
    }

    pub const fn magic_energy(&self) -> i32 {
        self.magic_energy
    }

    pub const fn coins(&self) -> i64 {
        self.coins
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        guarded_set(&mut self.first_name, value.into(), Self::KIND, Field::FirstName);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        guarded_set(&mut self.last_name, value.into(), Self::KIND, Field::LastName);
    }

    pub fn set_experience_points(&mut self, value: i64) {
        guarded_set(&mut self.experience_points, value, Self::KIND, Field::ExperiencePoints);
    }

    pub fn set_level(&mut self, value: i32) {
        guarded_set(&mut self.level, value, Self::KIND, Field::Level);
    }

    pub fn set_health(&mut self, value: i32) {
        guarded_set(&mut self.health, value, Self::KIND, Field::Health);
    }

    pub fn set_magic_energy(&mut self, value: i32) {
        guarded_set(&mut self.magic_energy, value, Self::KIND, Field::MagicEnergy);
    }

    pub fn set_coins(&mut self, value: i64) {
        guarded_set(&mut self.coins, value, Self::KIND, Field::Coins);
    }

    /// Re-check every constrained field.
    ///
    /// Always `true` for values built through this crate; kept for callers
    /// that want to assert it after deserializing or cloning across threads.
    pub fn is_valid(&self) -> bool {
        PLAYER_SCHEMA.constrained_fields().all(|field| {
            self.value(field)
                .is_none_or(|value| rules::accepts(Self::KIND, field, value))
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (level {})", self.full_name(), self.level)
    }
}

impl Record for Player {
    const SCHEMA: &'static Schema = &PLAYER_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => Some(FieldValue::Id(self.id.to_uuid())),
            Field::FirstName => Some(self.first_name.as_field_value()),
            Field::LastName => Some(self.last_name.as_field_value()),
            Field::ExperiencePoints => Some(self.experience_points.as_field_value()),
            Field::Level => Some(self.level.as_field_value()),
            Field::Health => Some(self.health.as_field_value()),
            Field::MagicEnergy => Some(self.magic_energy.as_field_value()),
            Field::Coins => Some(self.coins.as_field_value()),
            _ => None,
        }
    }
}

impl Entity for Player {
    type Id = PlayerId;
    type Dto = PlayerDto;

    fn id(&self) -> PlayerId {
        self.id
    }

    fn to_dto(&self) -> PlayerDto {
        PlayerDto {
            id: Some(self.id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            experience_points: self.experience_points,
            level: self.level,
            health: self.health,
            magic_energy: self.magic_energy,
            coins: self.coins,
        }
    }

    fn materialize(dto: &PlayerDto, id: PlayerId, _token: Token) -> Self {
        Self {
            id,
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            experience_points: dto.experience_points,
            level: dto.level,
            health: dto.health,
            magic_energy: dto.magic_energy,
            coins: dto.coins,
        }
    }
}
