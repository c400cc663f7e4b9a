//! Field constraint registry.
//!
//! # Design Rationale
//!
//! Constraints are data, not code scattered across setters and controllers.
//! Each rule is described exactly once by a [`ConstraintDef`]: the entity and
//! field it guards, its stable [`RuleId`], and the [`Check`] predicate. Both
//! violation reporting on transport objects and defensive mutation on domain
//! objects evaluate the same entries, so the two layers cannot drift apart.
//!
//! # Adding a New Constraint
//!
//! 1. If the rule id is new, add a variant to `RuleId` in `value_objects.rs`
//! 2. Add one [`ConstraintDef`] entry to [`CONSTRAINT_REGISTRY`]
//! 3. That's it. Creation, reporting and setters pick it up automatically

use crate::domain::value_objects::{EntityKind, Field, FieldValue, RuleId, ValueType};

// ── Checks ───────────────────────────────────────────────────────────────────

/// A pure predicate over one candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Text length, counted in UTF-16 code units, within `min..=max`.
    LengthBetween { min: usize, max: usize },
    /// Integer value no greater than the limit.
    AtMost(i64),
}

impl Check {
    /// Evaluate the predicate.
    ///
    /// A value of the wrong shape never satisfies a check. The
    /// `registry_checks_match_field_types` test keeps that branch unreachable
    /// for registered rules.
    pub fn accepts(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::LengthBetween { min, max }, FieldValue::Text(text)) => {
                let len = text.encode_utf16().count();
                len >= *min && len <= *max
            }
            (Self::AtMost(limit), FieldValue::Integer(n)) => n <= *limit,
            _ => false,
        }
    }

    /// The value shape this check understands.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::LengthBetween { .. } => ValueType::Text,
            Self::AtMost(_) => ValueType::Integer,
        }
    }

    /// Human-readable constraint text for `field`.
    pub fn describe(&self, field: Field) -> String {
        match self {
            Self::LengthBetween { min, max } => {
                format!("length({field}) >= {min} && length({field}) <= {max}")
            }
            Self::AtMost(limit) => format!("{field} <= {limit}"),
        }
    }
}

// ── Constraint definitions ───────────────────────────────────────────────────

/// One named rule attached to one field of one entity.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintDef {
    pub entity: EntityKind,
    pub field: Field,
    pub rule: RuleId,
    pub check: Check,
}

impl ConstraintDef {
    pub fn description(&self) -> String {
        self.check.describe(self.field)
    }
}

/// Single source of truth for field constraints.
///
/// Ordering is semantic: rules for the same field are evaluated and reported
/// in the order they appear here.
pub static CONSTRAINT_REGISTRY: &[ConstraintDef] = &[
    // ── Player ───────────────────────────────────────────────────────────────
    ConstraintDef {
        entity: EntityKind::Player,
        field: Field::FirstName,
        rule: RuleId::CorrectLength,
        check: Check::LengthBetween { min: 1, max: 15 },
    },
    ConstraintDef {
        entity: EntityKind::Player,
        field: Field::LastName,
        rule: RuleId::CorrectLength,
        check: Check::LengthBetween { min: 3, max: 20 },
    },
    ConstraintDef {
        entity: EntityKind::Player,
        field: Field::Level,
        rule: RuleId::LevelValue,
        check: Check::AtMost(12),
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for constraint queries.

/// All rules for `(entity, field)`, in declaration order.
pub fn constraints_for(
    entity: EntityKind,
    field: Field,
) -> impl Iterator<Item = &'static ConstraintDef> {
    CONSTRAINT_REGISTRY
        .iter()
        .filter(move |def| def.entity == entity && def.field == field)
}

/// All rules registered for an entity, in declaration order.
pub fn constraints_of(entity: EntityKind) -> impl Iterator<Item = &'static ConstraintDef> {
    CONSTRAINT_REGISTRY
        .iter()
        .filter(move |def| def.entity == entity)
}

/// Whether any rule guards `(entity, field)`.
pub fn is_constrained(entity: EntityKind, field: Field) -> bool {
    constraints_for(entity, field).next().is_some()
}

/// Rule ids that `value` violates for `(entity, field)`, in declaration order.
///
/// Empty when the value is acceptable or the field has no rules.
pub fn check_value(entity: EntityKind, field: Field, value: FieldValue<'_>) -> Vec<RuleId> {
    constraints_for(entity, field)
        .filter(|def| !def.check.accepts(value))
        .map(|def| def.rule)
        .collect()
}

/// The first rule that `value` violates, with its definition.
pub fn first_failure(
    entity: EntityKind,
    field: Field,
    value: FieldValue<'_>,
) -> Option<&'static ConstraintDef> {
    constraints_for(entity, field).find(|def| !def.check.accepts(value))
}

/// Whether `value` satisfies every rule for `(entity, field)`.
pub fn accepts(entity: EntityKind, field: Field, value: FieldValue<'_>) -> bool {
    first_failure(entity, field, value).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── registry integrity ───────────────────────────────────────────────────

    #[test]
    fn registry_checks_match_field_types() {
        for def in CONSTRAINT_REGISTRY {
            assert_eq!(
                def.check.value_type(),
                def.field.value_type(),
                "{}.{} uses a {:?} check on a {:?} field",
                def.entity,
                def.field,
                def.check.value_type(),
                def.field.value_type(),
            );
        }
    }

    #[test]
    fn length_ranges_are_well_formed() {
        for def in CONSTRAINT_REGISTRY {
            if let Check::LengthBetween { min, max } = def.check {
                assert!(min <= max, "{}.{} has min > max", def.entity, def.field);
            }
        }
    }

    #[test]
    fn only_player_carries_constraints() {
        assert_eq!(constraints_of(EntityKind::Player).count(), 3);
        assert_eq!(constraints_of(EntityKind::MagicSpell).count(), 0);
        assert_eq!(constraints_of(EntityKind::PlayerMagicSpell).count(), 0);
    }

    // ── first name: 1..=15 ──────────────────────────────────────────────────

    #[test]
    fn first_name_length_bounds() {
        let check = |s: &str| check_value(EntityKind::Player, Field::FirstName, FieldValue::Text(s));

        assert_eq!(check(""), vec![RuleId::CorrectLength]);
        assert!(check("L").is_empty());
        assert!(check("Lance").is_empty());
        assert!(check(&"x".repeat(15)).is_empty());
        assert_eq!(check(&"x".repeat(16)), vec![RuleId::CorrectLength]);
        assert_eq!(check("This is too long"), vec![RuleId::CorrectLength]);
    }

    #[test]
    fn first_name_every_length_up_to_forty() {
        for len in 0..=40 {
            let name = "a".repeat(len);
            let ok = accepts(EntityKind::Player, Field::FirstName, FieldValue::Text(&name));
            assert_eq!(ok, (1..=15).contains(&len), "len = {len}");
        }
    }

    // ── last name: 3..=20 ───────────────────────────────────────────────────

    #[test]
    fn last_name_every_length_up_to_forty() {
        for len in 0..=40 {
            let name = "b".repeat(len);
            let ok = accepts(EntityKind::Player, Field::LastName, FieldValue::Text(&name));
            assert_eq!(ok, (3..=20).contains(&len), "len = {len}");
        }
        assert!(!accepts(
            EntityKind::Player,
            Field::LastName,
            FieldValue::Text("This is too just long")
        ));
    }

    #[test]
    fn length_counts_utf16_units() {
        let first = |s: &str| accepts(EntityKind::Player, Field::FirstName, FieldValue::Text(s));

        // One unit each, two bytes each.
        assert!(first(&"é".repeat(15)));
        // Surrogate pairs: two units each.
        assert!(first(&"😀".repeat(7)));
        assert!(!first(&"😀".repeat(8)));
        assert!(!first(&"😀".repeat(15)));
    }

    // ── level: <= 12 ────────────────────────────────────────────────────────

    #[test]
    fn level_upper_bound_only() {
        let check = |n: i64| check_value(EntityKind::Player, Field::Level, FieldValue::Integer(n));

        assert!(check(i64::MIN).is_empty());
        assert!(check(-5).is_empty());
        assert!(check(0).is_empty());
        assert!(check(12).is_empty());
        assert_eq!(check(13), vec![RuleId::LevelValue]);
        assert_eq!(check(i64::MAX), vec![RuleId::LevelValue]);
    }

    // ── unconstrained fields ────────────────────────────────────────────────

    #[test]
    fn unconstrained_fields_accept_anything() {
        assert!(!is_constrained(EntityKind::Player, Field::Coins));
        assert!(accepts(EntityKind::Player, Field::Coins, FieldValue::Integer(-1)));
        assert!(accepts(EntityKind::Player, Field::Health, FieldValue::Integer(i64::MIN)));
        assert!(accepts(EntityKind::MagicSpell, Field::Name, FieldValue::Text("")));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let check = Check::AtMost(12);
        assert!(!check.accepts(FieldValue::Text("12")));
    }

    // ── descriptions ────────────────────────────────────────────────────────

    #[test]
    fn descriptions_match_constraint_text() {
        let texts: Vec<String> = constraints_of(EntityKind::Player)
            .map(ConstraintDef::description)
            .collect();
        assert_eq!(
            texts,
            vec![
                "length(firstName) >= 1 && length(firstName) <= 15",
                "length(lastName) >= 3 && length(lastName) <= 20",
                "level <= 12",
            ]
        );
    }
}
