//! Infrastructure adapters for Grimoire.
//!
//! This crate implements the ports defined in `grimoire-core::application::ports`
//! and reads roster files. It contains all I/O operations.

pub mod roster;
pub mod store;

// Re-export commonly used adapters
pub use roster::{ImportReport, Roster, RosterError, RosterLoader, SkippedEntry};
pub use store::InMemoryStore;
