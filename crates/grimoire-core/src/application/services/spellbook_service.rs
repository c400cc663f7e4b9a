//! Spellbook Service - spells and the players who carry them.
//!
//! Owns the one cross-entity rule the domain cannot check on its own: a
//! holding may only reference a stored player and a stored spell.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::EntityStore},
    domain::{
        Entity, EntityKind, Field, MagicSpell, MagicSpellDto, Player, PlayerMagicSpell,
        PlayerMagicSpellDto, create_entity,
    },
    error::GrimoireResult,
};

/// One inventory line: a player, a spell and the casts left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellHolding {
    pub player_name: String,
    pub spell_name: String,
    pub remaining_casts: i32,
}

impl fmt::Display for SpellHolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.remaining_casts == 1 {
            "spell"
        } else {
            "spells"
        };
        write!(
            f,
            "{} has {} {} magic {}",
            self.player_name, self.remaining_casts, self.spell_name, noun
        )
    }
}

/// Service for spell and inventory operations.
pub struct SpellbookService {
    players: Box<dyn EntityStore<Player>>,
    spells: Box<dyn EntityStore<MagicSpell>>,
    holdings: Box<dyn EntityStore<PlayerMagicSpell>>,
}

impl SpellbookService {
    /// Create a new spellbook service.
    ///
    /// `players` should be the same store the `PlayerService` writes to.
    pub fn new(
        players: Box<dyn EntityStore<Player>>,
        spells: Box<dyn EntityStore<MagicSpell>>,
        holdings: Box<dyn EntityStore<PlayerMagicSpell>>,
    ) -> Self {
        Self {
            players,
            spells,
            holdings,
        }
    }

    /// Create and store a spell.
    #[instrument(skip_all, fields(name = %dto.name))]
    pub fn create_spell(&self, dto: MagicSpellDto) -> GrimoireResult<MagicSpellDto> {
        let spell: MagicSpell = create_entity(&dto)?;
        let created = spell.to_dto();
        self.spells.insert(spell)?;

        info!("Spell created");
        Ok(created)
    }

    /// List all spells, in creation order.
    pub fn list_spells(&self) -> GrimoireResult<Vec<MagicSpellDto>> {
        Ok(self.spells.list()?.iter().map(|s| s.to_dto()).collect())
    }

    /// Put a spell into a player's inventory.
    ///
    /// Both references must name stored entities, otherwise this fails with
    /// `DanglingReference` and nothing is stored.
    #[instrument(
        skip_all,
        fields(player = %dto.player_id, spell = %dto.magic_spell_id)
    )]
    pub fn grant_spell(&self, dto: PlayerMagicSpellDto) -> GrimoireResult<PlayerMagicSpellDto> {
        if !self.players.contains(dto.player_id)? {
            return Err(dangling(Field::PlayerId, dto.player_id).into());
        }
        if !self.spells.contains(dto.magic_spell_id)? {
            return Err(dangling(Field::MagicSpellId, dto.magic_spell_id).into());
        }

        let holding: PlayerMagicSpell = create_entity(&dto)?;
        let created = holding.to_dto();
        self.holdings.insert(holding)?;

        info!(remaining_casts = dto.remaining_casts, "Spell granted");
        Ok(created)
    }

    /// Resolve every holding into a printable inventory line.
    #[instrument(skip(self))]
    pub fn holdings(&self) -> GrimoireResult<Vec<SpellHolding>> {
        let holdings = self.holdings.list()?;
        debug!(count = holdings.len(), "Resolving holdings");

        holdings
            .iter()
            .map(|holding| {
                let player = self.players.get(holding.player_id())?;
                let spell = self.spells.get(holding.magic_spell_id())?;
                Ok(SpellHolding {
                    player_name: player.first_name().to_string(),
                    spell_name: spell.name().to_string(),
                    remaining_casts: holding.remaining_casts(),
                })
            })
            .collect()
    }
}

fn dangling(field: Field, id: impl fmt::Display) -> ApplicationError {
    ApplicationError::DanglingReference {
        entity: EntityKind::PlayerMagicSpell,
        field,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::services::testing::MemStore,
        domain::{MagicSpellId, PlayerDto, PlayerId},
        error::GrimoireError,
    };

    struct Fixture {
        players: MemStore<Player>,
        service: SpellbookService,
    }

    fn fixture() -> Fixture {
        let players = MemStore::<Player>::default();
        let service = SpellbookService::new(
            Box::new(players.clone()),
            Box::new(MemStore::<MagicSpell>::default()),
            Box::new(MemStore::<PlayerMagicSpell>::default()),
        );
        Fixture { players, service }
    }

    fn transport() -> MagicSpellDto {
        MagicSpellDto {
            name: "Transport".into(),
            cast_energy: 100,
            price: 120_000,
            weight: 87,
            ..MagicSpellDto::default()
        }
    }

    fn lance(fx: &Fixture) -> PlayerId {
        let player: Player = create_entity(&PlayerDto::new("Lance", "Skyrunner", 3)).unwrap();
        let id = player.id();
        fx.players.insert(player).unwrap();
        id
    }

    #[test]
    fn holding_lines_pluralise() {
        let mut line = SpellHolding {
            player_name: "Lance".into(),
            spell_name: "Transport".into(),
            remaining_casts: 2,
        };
        assert_eq!(line.to_string(), "Lance has 2 Transport magic spells");

        line.remaining_casts = 1;
        assert_eq!(line.to_string(), "Lance has 1 Transport magic spell");

        line.remaining_casts = 0;
        assert_eq!(line.to_string(), "Lance has 0 Transport magic spells");
    }

    #[test]
    fn grant_then_list_holdings() {
        let fx = fixture();
        let player = lance(&fx);
        let spell = fx.service.create_spell(transport()).unwrap().id.unwrap();

        let granted = fx
            .service
            .grant_spell(PlayerMagicSpellDto::new(player, spell, 2))
            .unwrap();
        assert!(granted.id.is_some());

        let lines: Vec<String> = fx
            .service
            .holdings()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, vec!["Lance has 2 Transport magic spells"]);
    }

    #[test]
    fn unknown_player_is_a_dangling_reference() {
        let fx = fixture();
        let spell = fx.service.create_spell(transport()).unwrap().id.unwrap();

        let err = fx
            .service
            .grant_spell(PlayerMagicSpellDto::new(PlayerId::new(), spell, 2))
            .unwrap_err();
        assert!(matches!(
            err,
            GrimoireError::Application(ApplicationError::DanglingReference {
                field: Field::PlayerId,
                ..
            })
        ));
        assert!(fx.service.holdings().unwrap().is_empty());
    }

    #[test]
    fn unknown_spell_is_a_dangling_reference() {
        let fx = fixture();
        let player = lance(&fx);

        let err = fx
            .service
            .grant_spell(PlayerMagicSpellDto::new(player, MagicSpellId::new(), 2))
            .unwrap_err();
        assert!(matches!(
            err,
            GrimoireError::Application(ApplicationError::DanglingReference {
                field: Field::MagicSpellId,
                ..
            })
        ));
    }

    #[test]
    fn spells_list_in_creation_order() {
        let fx = fixture();
        fx.service.create_spell(transport()).unwrap();
        fx.service
            .create_spell(MagicSpellDto {
                name: "Fireball".into(),
                ..MagicSpellDto::default()
            })
            .unwrap();

        let names: Vec<String> = fx
            .service
            .list_spells()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Transport", "Fireball"]);
    }
}
