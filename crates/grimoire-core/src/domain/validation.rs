use crate::domain::{
    entities::{MagicSpellDto, PlayerDto, PlayerMagicSpellDto},
    error::ValidationError,
    schema::{self, FieldViolation, Record},
};

/// Centralized pre-submission validation.
///
/// Wraps the schema queries so callers that only hold a transport object can
/// ask "would this be created?" without creating anything.
pub struct DomainValidator;

impl DomainValidator {
    /// Every violation on the record, in schema order.
    pub fn report<R: Record>(record: &R) -> Vec<FieldViolation> {
        schema::all_violations(record)
    }

    /// The failure creation would raise, if any.
    pub fn verdict<R: Record>(record: &R) -> Result<(), ValidationError> {
        match schema::first_violation(record) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn validate_player(dto: &PlayerDto) -> Result<(), ValidationError> {
        Self::verdict(dto)
    }

    pub fn validate_spell(dto: &MagicSpellDto) -> Result<(), ValidationError> {
        Self::verdict(dto)
    }

    pub fn validate_holding(dto: &PlayerMagicSpellDto) -> Result<(), ValidationError> {
        Self::verdict(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Field;

    #[test]
    fn report_lists_every_failing_field() {
        let dto = PlayerDto::new("This is too long", "Al", 13);
        let fields: Vec<Field> = DomainValidator::report(&dto)
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Level]);
    }

    #[test]
    fn verdict_matches_creation_order() {
        let dto = PlayerDto::new("Lance", "Al", 13);
        let err = DomainValidator::validate_player(&dto).unwrap_err();
        assert_eq!(err.field, Field::LastName);
    }

    #[test]
    fn spells_always_pass() {
        assert!(DomainValidator::validate_spell(&MagicSpellDto::default()).is_ok());
    }
}
