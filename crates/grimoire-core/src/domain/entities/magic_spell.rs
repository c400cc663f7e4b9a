//! The `MagicSpell` entity: gives you the ability to do magical things.
//!
//! No rules are registered for spells today, so creation never fails and
//! every setter applies. Setters still route through the registry so a rule
//! added later is enforced without touching this file.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Entity, guarded_set, sealed::Token},
    ids::MagicSpellId,
    schema::{MAGIC_SPELL_SCHEMA, Record, Schema},
    value_objects::{AsFieldValue, EntityKind, Field, FieldValue},
};

/// Boundary-facing spell record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MagicSpellDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MagicSpellId>,
    pub name: String,
    /// Energy required to cast it.
    pub cast_energy: i32,
    /// How much it costs to buy.
    pub price: i64,
    /// Affects how many spells a player can carry.
    pub weight: i32,
}

impl Record for MagicSpellDto {
    const SCHEMA: &'static Schema = &MAGIC_SPELL_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => self.id.map(|id| FieldValue::Id(id.to_uuid())),
            Field::Name => Some(self.name.as_field_value()),
            Field::CastEnergy => Some(self.cast_energy.as_field_value()),
            Field::Price => Some(self.price.as_field_value()),
            Field::Weight => Some(self.weight.as_field_value()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSpell {
    id: MagicSpellId,
    name: String,
    cast_energy: i32,
    price: i64,
    weight: i32,
}

impl MagicSpell {
    const KIND: EntityKind = EntityKind::MagicSpell;

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn cast_energy(&self) -> i32 {
        self.cast_energy
    }

    pub const fn price(&self) -> i64 {
        self.price
    }

    pub const fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        guarded_set(&mut self.name, value.into(), Self::KIND, Field::Name);
    }

    pub fn set_cast_energy(&mut self, value: i32) {
        guarded_set(&mut self.cast_energy, value, Self::KIND, Field::CastEnergy);
    }

    pub fn set_price(&mut self, value: i64) {
        guarded_set(&mut self.price, value, Self::KIND, Field::Price);
    }

    pub fn set_weight(&mut self, value: i32) {
        guarded_set(&mut self.weight, value, Self::KIND, Field::Weight);
    }
}

impl Record for MagicSpell {
    const SCHEMA: &'static Schema = &MAGIC_SPELL_SCHEMA;

    fn value(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Id => Some(FieldValue::Id(self.id.to_uuid())),
            Field::Name => Some(self.name.as_field_value()),
            Field::CastEnergy => Some(self.cast_energy.as_field_value()),
            Field::Price => Some(self.price.as_field_value()),
            Field::Weight => Some(self.weight.as_field_value()),
            _ => None,
        }
    }
}

impl Entity for MagicSpell {
    type Id = MagicSpellId;
    type Dto = MagicSpellDto;

    fn id(&self) -> MagicSpellId {
        self.id
    }

    fn to_dto(&self) -> MagicSpellDto {
        MagicSpellDto {
            id: Some(self.id),
            name: self.name.clone(),
            cast_energy: self.cast_energy,
            price: self.price,
            weight: self.weight,
        }
    }

    fn materialize(dto: &MagicSpellDto, id: MagicSpellId, _token: Token) -> Self {
        Self {
            id,
            name: dto.name.clone(),
            cast_energy: dto.cast_energy,
            price: dto.price,
            weight: dto.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversion::create_entity;

    fn transport() -> MagicSpellDto {
        MagicSpellDto {
            id: None,
            name: "Transport".into(),
            cast_energy: 100,
            price: 120_000,
            weight: 87,
        }
    }

    #[test]
    fn spells_are_always_creatable() {
        let spell: MagicSpell = create_entity(&MagicSpellDto::default()).unwrap();
        assert_eq!(spell.name(), "");
    }

    #[test]
    fn setters_apply_any_value() {
        let mut spell: MagicSpell = create_entity(&transport()).unwrap();
        spell.set_name("Teleport");
        spell.set_cast_energy(-10);
        spell.set_price(0);
        spell.set_weight(1);
        assert_eq!(spell.name(), "Teleport");
        assert_eq!(spell.cast_energy(), -10);
        assert_eq!(spell.price(), 0);
        assert_eq!(spell.weight(), 1);
    }

    #[test]
    fn projection_preserves_fields() {
        let spell: MagicSpell = create_entity(&transport()).unwrap();
        let dto = spell.to_dto();
        assert_eq!(dto.id, Some(spell.id()));
        assert_eq!(
            MagicSpellDto { id: None, ..dto },
            transport(),
        );
    }
}
