//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "register a player" or "grant a spell".

pub mod player_service;
pub mod spellbook_service;

pub use player_service::PlayerService;
pub use spellbook_service::{SpellHolding, SpellbookService};
