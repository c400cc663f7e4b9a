//! Grimoire Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Grimoire:
//! constraint-validated conversion between transport objects (DTOs) and
//! always-valid domain models for players, magic spells and the spells a
//! player carries.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          grimoire-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PlayerService, SpellbookService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (EntityStore<E>)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    grimoire-adapters (Infrastructure)   │
//! │     (InMemoryStore, RosterLoader)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (rules, schemas, Player, MagicSpell)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use grimoire_core::domain::{Player, PlayerDto, create_entity};
//!
//! let dto = PlayerDto::new("Lance", "Skyrunner", 3);
//! let mut player: Player = create_entity(&dto).unwrap();
//!
//! player.set_level(13); // above the cap: silently ignored
//! assert_eq!(player.level(), 3);
//!
//! let too_long = PlayerDto::new("This is too long", "Skyrunner", 3);
//! let err = create_entity::<Player>(&too_long).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "The constraint was not met: length(firstName) >= 1 && length(firstName) <= 15"
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, PlayerService, SpellHolding, SpellbookService, ports::EntityStore,
    };
    pub use crate::domain::{
        DomainError, Entity, EntityKind, Field, FieldViolation, MagicSpell, MagicSpellDto,
        MagicSpellId, Player, PlayerDto, PlayerId, PlayerMagicSpell, PlayerMagicSpellDto,
        PlayerMagicSpellId, Record, RuleId, ValidationError, create_entity, to_transport,
    };
    pub use crate::error::{ErrorCategory, GrimoireError, GrimoireResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
