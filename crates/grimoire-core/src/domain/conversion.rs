//! Transport → domain creation and domain → transport projection.

use crate::domain::{
    entities::{Entity, sealed::Token},
    error::DomainError,
    ids::Identity,
    schema,
};

/// Build a domain model from its transport object.
///
/// Constrained fields are checked in schema order. The first field with a
/// violation aborts creation with that field's first failed rule; later
/// fields are not examined. On success every field is copied verbatim and a
/// fresh identity is minted. Any id already present on `dto` is ignored.
///
/// This is the only path that mints identities.
pub fn create_entity<E: Entity>(dto: &E::Dto) -> Result<E, DomainError> {
    if let Some(violation) = schema::first_violation(dto) {
        return Err(violation.into());
    }

    Ok(E::materialize(dto, E::Id::mint(), Token::new()))
}

/// Project a domain model back to its transport form.
pub fn to_transport<E: Entity>(entity: &E) -> E::Dto {
    entity.to_dto()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Player, PlayerDto},
        ids::PlayerId,
        value_objects::{Field, RuleId},
    };

    fn expect_violation(dto: PlayerDto) -> crate::domain::error::ValidationError {
        match create_entity::<Player>(&dto) {
            Err(DomainError::Validation(err)) => err,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn long_first_name_is_rejected() {
        let err = expect_violation(PlayerDto::new("This is too long", "Skyrunner", 3));
        assert_eq!(err.field, Field::FirstName);
        assert_eq!(err.rule, RuleId::CorrectLength);
        assert_eq!(
            err.to_string(),
            "The constraint was not met: length(firstName) >= 1 && length(firstName) <= 15"
        );
    }

    #[test]
    fn long_last_name_is_rejected() {
        let err = expect_violation(PlayerDto::new("Lance", "This is too just long", 3));
        assert_eq!(err.field, Field::LastName);
        assert_eq!(
            err.to_string(),
            "The constraint was not met: length(lastName) >= 3 && length(lastName) <= 20"
        );
    }

    #[test]
    fn high_level_is_rejected() {
        let err = expect_violation(PlayerDto::new("Lance", "Skyrunner", 13));
        assert_eq!(err.field, Field::Level);
        assert_eq!(err.rule, RuleId::LevelValue);
        assert_eq!(err.to_string(), "The constraint was not met: level <= 12");
    }

    #[test]
    fn first_invalid_field_wins() {
        let err = expect_violation(PlayerDto::new("", "Al", 99));
        assert_eq!(err.field, Field::FirstName);

        let err = expect_violation(PlayerDto::new("Lance", "Al", 99));
        assert_eq!(err.field, Field::LastName);
    }

    #[test]
    fn valid_player_gets_fresh_identity() {
        let mut dto = PlayerDto::new("Lance", "Skyrunner", 2);
        let supplied = PlayerId::new();
        dto.id = Some(supplied);
        dto.coins = 250;

        let a: Player = create_entity(&dto).unwrap();
        let b: Player = create_entity(&dto).unwrap();

        assert_ne!(a.id(), supplied);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.coins(), 250);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let name15 = "a".repeat(15);
        let last20 = "b".repeat(20);
        let player: Player = create_entity(&PlayerDto::new(name15.as_str(), last20.as_str(), 12)).unwrap();
        assert_eq!(player.level(), 12);

        let player: Player = create_entity(&PlayerDto::new("A", "Abe", i32::MIN)).unwrap();
        assert_eq!(player.level(), i32::MIN);
    }

    #[test]
    fn projection_round_trips_through_creation() {
        let mut dto = PlayerDto::new("Lance", "Skyrunner", 3);
        dto.experience_points = 1000;
        dto.health = 10;

        let player: Player = create_entity(&dto).unwrap();
        let projected = to_transport(&player);
        assert_eq!(projected.id, Some(player.id()));
        assert_eq!(PlayerDto { id: None, ..projected.clone() }, dto);

        let again: Player = create_entity(&projected).unwrap();
        assert_eq!(to_transport(&again).first_name, "Lance");
    }
}
