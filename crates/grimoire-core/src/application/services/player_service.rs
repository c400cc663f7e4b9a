//! Player Service - player registration and maintenance.
//!
//! Every write goes through validated creation or the guarded setters, so
//! the store only ever receives players that satisfy their constraints.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::EntityStore,
    domain::{
        DomainValidator, Entity, FieldViolation, Player, PlayerDto, PlayerId, create_entity,
    },
    error::GrimoireResult,
};

/// Service for player operations.
pub struct PlayerService {
    store: Box<dyn EntityStore<Player>>,
}

impl PlayerService {
    /// Create a new player service over the given store.
    pub fn new(store: Box<dyn EntityStore<Player>>) -> Self {
        Self { store }
    }

    /// Every violation on a candidate record, without creating anything.
    pub fn check(&self, dto: &PlayerDto) -> Vec<FieldViolation> {
        DomainValidator::report(dto)
    }

    /// Validate, create and store a player.
    ///
    /// Fails with the first violated constraint; nothing is stored then.
    /// Returns the projection of the stored player, identity included.
    #[instrument(skip_all, fields(first_name = %dto.first_name, last_name = %dto.last_name))]
    pub fn create_player(&self, dto: PlayerDto) -> GrimoireResult<PlayerDto> {
        let player: Player = create_entity(&dto)?;
        let id = player.id();
        let created = player.to_dto();
        self.store.insert(player)?;

        info!(%id, "Player created");
        Ok(created)
    }

    /// Get a player by id.
    pub fn get_player(&self, id: PlayerId) -> GrimoireResult<PlayerDto> {
        self.store.get(id).map(|player| player.to_dto())
    }

    /// List all players, in creation order.
    pub fn list_players(&self) -> GrimoireResult<Vec<PlayerDto>> {
        Ok(self.store.list()?.iter().map(|p| p.to_dto()).collect())
    }

    /// Apply new names to a stored player.
    ///
    /// A rejected name leaves the stored value in place. Compare the returned
    /// projection with the request to detect rejection.
    #[instrument(skip(self))]
    pub fn rename_player(
        &self,
        id: PlayerId,
        first_name: &str,
        last_name: &str,
    ) -> GrimoireResult<PlayerDto> {
        self.modify(id, |player| {
            player.set_first_name(first_name);
            player.set_last_name(last_name);
        })
    }

    /// Apply a new level to a stored player. Levels above the cap are ignored.
    #[instrument(skip(self))]
    pub fn set_level(&self, id: PlayerId, level: i32) -> GrimoireResult<PlayerDto> {
        self.modify(id, |player| player.set_level(level))
    }

    fn modify(&self, id: PlayerId, apply: impl FnOnce(&mut Player)) -> GrimoireResult<PlayerDto> {
        let mut player = self.store.get(id)?;
        let before = player.clone();
        apply(&mut player);

        if player == before {
            debug!("No change applied");
        } else {
            self.store.update(player.clone())?;
            debug!("Player updated");
        }

        Ok(player.to_dto())
    }
}
