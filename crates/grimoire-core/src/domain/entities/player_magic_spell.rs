//! The `PlayerMagicSpell` join: a magic spell in a player's inventory.
//!
//! The core only owns the shape of the two references. Whether they point at
//! stored entities is checked by `SpellbookService::grant_spell`.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Entity, guarded_set, sealed::Token},
    ids::{MagicSpellId, PlayerId, PlayerMagicSpellId},
    schema::{PLAYER_MAGIC_SPELL_SCHEMA, Record, Schema},
    value_objects::{AsFieldValue, EntityKind, Field, FieldValue},
};

/// Boundary-facing inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMagicSpellDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlayerMagicSpellId>,
    pub player_id: PlayerId,
    pub magic_spell_id: MagicSpellId,
    /// Casts the player has left for this spell.
    #[serde(default)]
    pub remaining_casts: i32,
}

impl PlayerMagicSpellDto {
    pub fn new(player_id: PlayerId, magic_spell_id: MagicSpellId, remaining_casts: i32) -> Self {
        Self {
            id: None,
            player_id,
            magic_spell_id,
            remaining_casts,
        }
    }
}

impl Record for PlayerMagicSpellDto {
    const SCHEMA: &'static Schema = &PLAYER_MAGIC_SPELL_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => self.id.map(|id| FieldValue::Id(id.to_uuid())),
            Field::PlayerId => Some(FieldValue::Id(self.player_id.to_uuid())),
            Field::MagicSpellId => Some(FieldValue::Id(self.magic_spell_id.to_uuid())),
            Field::RemainingCasts => Some(self.remaining_casts.as_field_value()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMagicSpell {
    id: PlayerMagicSpellId,
    player_id: PlayerId,
    magic_spell_id: MagicSpellId,
    remaining_casts: i32,
}

impl PlayerMagicSpell {
    pub const fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub const fn magic_spell_id(&self) -> MagicSpellId {
        self.magic_spell_id
    }

    pub const fn remaining_casts(&self) -> i32 {
        self.remaining_casts
    }

    pub fn set_remaining_casts(&mut self, value: i32) {
        guarded_set(
            &mut self.remaining_casts,
            value,
            EntityKind::PlayerMagicSpell,
            Field::RemainingCasts,
        );
    }
}

impl Record for PlayerMagicSpell {
    const SCHEMA: &'static Schema = &PLAYER_MAGIC_SPELL_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => Some(FieldValue::Id(self.id.to_uuid())),
            Field::PlayerId => Some(FieldValue::Id(self.player_id.to_uuid())),
            Field::MagicSpellId => Some(FieldValue::Id(self.magic_spell_id.to_uuid())),
            Field::RemainingCasts => Some(self.remaining_casts.as_field_value()),
            _ => None,
        }
    }
}

impl Entity for PlayerMagicSpell {
    type Id = PlayerMagicSpellId;
    type Dto = PlayerMagicSpellDto;

    fn id(&self) -> PlayerMagicSpellId {
        self.id
    }

    fn to_dto(&self) -> PlayerMagicSpellDto {
        PlayerMagicSpellDto {
            id: Some(self.id),
            player_id: self.player_id,
            magic_spell_id: self.magic_spell_id,
            remaining_casts: self.remaining_casts,
        }
    }

    fn materialize(dto: &PlayerMagicSpellDto, id: PlayerMagicSpellId, _token: Token) -> Self {
        Self {
            id,
            player_id: dto.player_id,
            magic_spell_id: dto.magic_spell_id,
            remaining_casts: dto.remaining_casts,
        }
    }
}
