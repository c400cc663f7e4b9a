//! Entity schemas and the [`Record`] abstraction.
//!
//! A [`Schema`] is the ordered field list of one entity family. Both the
//! transport object and the domain model of an entity implement [`Record`]
//! against the same schema, so violation queries work identically on either
//! side of the boundary.
//!
//! Field order is semantic: fail-fast creation checks constrained fields in
//! schema order and stops at the first one with a violation.

use serde::Serialize;

use crate::domain::{
    error::ValidationError,
    rules,
    value_objects::{EntityKind, Field, FieldValue, RuleId},
};

/// Ordered field list for one entity family.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub entity: EntityKind,
    pub fields: &'static [Field],
}

impl Schema {
    /// Fields that carry at least one registered rule, in schema order.
    pub fn constrained_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .copied()
            .filter(|field| rules::is_constrained(self.entity, *field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

pub const PLAYER_SCHEMA: Schema = Schema {
    entity: EntityKind::Player,
    fields: &[
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::ExperiencePoints,
        Field::Level,
        Field::Health,
        Field::MagicEnergy,
        Field::Coins,
    ],
};

pub const MAGIC_SPELL_SCHEMA: Schema = Schema {
    entity: EntityKind::MagicSpell,
    fields: &[
        Field::Id,
        Field::Name,
        Field::CastEnergy,
        Field::Price,
        Field::Weight,
    ],
};

pub const PLAYER_MAGIC_SPELL_SCHEMA: Schema = Schema {
    entity: EntityKind::PlayerMagicSpell,
    fields: &[
        Field::Id,
        Field::PlayerId,
        Field::MagicSpellId,
        Field::RemainingCasts,
    ],
};

/// Schema lookup by entity kind.
pub fn schema_of(entity: EntityKind) -> &'static Schema {
    match entity {
        EntityKind::Player => &PLAYER_SCHEMA,
        EntityKind::MagicSpell => &MAGIC_SPELL_SCHEMA,
        EntityKind::PlayerMagicSpell => &PLAYER_MAGIC_SPELL_SCHEMA,
    }
}

/// A value set laid out according to a [`Schema`].
pub trait Record {
    const SCHEMA: &'static Schema;

    /// Current value of `field`.
    ///
    /// `None` when the field is absent from this record (an unset transport
    /// id) or not part of the schema.
    fn value(&self, field: Field) -> Option<FieldValue<'_>>;
}

/// One violated rule, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: Field,
    pub rule: RuleId,
    pub description: String,
}

/// Rule ids the record's current `field` value violates, in declaration order.
pub fn violations<R: Record>(record: &R, field: Field) -> Vec<RuleId> {
    record
        .value(field)
        .map(|value| rules::check_value(R::SCHEMA.entity, field, value))
        .unwrap_or_default()
}

/// Every violation across all constrained fields, in schema order.
pub fn all_violations<R: Record>(record: &R) -> Vec<FieldViolation> {
    let entity = R::SCHEMA.entity;
    let mut found = Vec::new();

    for field in R::SCHEMA.constrained_fields() {
        let Some(value) = record.value(field) else {
            continue;
        };
        for def in rules::constraints_for(entity, field) {
            if !def.check.accepts(value) {
                found.push(FieldViolation {
                    field,
                    rule: def.rule,
                    description: def.description(),
                });
            }
        }
    }

    found
}

/// The first violation in schema order, or `None` when the record is clean.
///
/// Later fields are not examined once one has failed.
pub fn first_violation<R: Record>(record: &R) -> Option<ValidationError> {
    let entity = R::SCHEMA.entity;

    R::SCHEMA.constrained_fields().find_map(|field| {
        let value = record.value(field)?;
        rules::first_failure(entity, field, value).map(|def| ValidationError {
            entity,
            field,
            rule: def.rule,
            description: def.description(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal record for exercising the generic queries without an entity.
    struct Candidate {
        first: &'static str,
        last: &'static str,
        level: i64,
    }

    impl Record for Candidate {
        const SCHEMA: &'static Schema = &PLAYER_SCHEMA;

        fn value(&self, field: Field) -> Option<FieldValue<'_>> {
            match field {
                Field::FirstName => Some(FieldValue::Text(self.first)),
                Field::LastName => Some(FieldValue::Text(self.last)),
                Field::Level => Some(FieldValue::Integer(self.level)),
                _ => None,
            }
        }
    }

    #[test]
    fn player_constrained_fields_in_order() {
        let fields: Vec<Field> = PLAYER_SCHEMA.constrained_fields().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Level]);
    }

    #[test]
    fn spell_schemas_have_no_constrained_fields() {
        assert_eq!(MAGIC_SPELL_SCHEMA.constrained_fields().count(), 0);
        assert_eq!(PLAYER_MAGIC_SPELL_SCHEMA.constrained_fields().count(), 0);
    }

    #[test]
    fn schema_lookup_round_trips() {
        for entity in EntityKind::ALL {
            assert_eq!(schema_of(entity).entity, entity);
            assert!(schema_of(entity).contains(Field::Id));
        }
    }

    #[test]
    fn first_violation_is_fail_fast() {
        let c = Candidate {
            first: "This is too long",
            last: "This is too just long",
            level: 13,
        };
        let err = first_violation(&c).unwrap();
        assert_eq!(err.field, Field::FirstName);
        assert_eq!(err.rule, RuleId::CorrectLength);
    }

    #[test]
    fn all_violations_collects_every_field() {
        let c = Candidate {
            first: "This is too long",
            last: "This is too just long",
            level: 13,
        };
        let found = all_violations(&c);
        let fields: Vec<Field> = found.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Level]);
        assert_eq!(found[2].description, "level <= 12");
    }

    #[test]
    fn clean_record_has_no_violations() {
        let c = Candidate {
            first: "Lance",
            last: "Skyrunner",
            level: 2,
        };
        assert!(first_violation(&c).is_none());
        assert!(all_violations(&c).is_empty());
        assert!(violations(&c, Field::Level).is_empty());
    }

    #[test]
    fn absent_field_reports_nothing() {
        let c = Candidate {
            first: "Lance",
            last: "Skyrunner",
            level: 2,
        };
        assert!(violations(&c, Field::Coins).is_empty());
    }
}
