//! Application layer for Grimoire.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PlayerService, SpellbookService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! constraint logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    PlayerService,
    SpellHolding, // inventory line for display
    SpellbookService,
};

// Re-export port traits (for adapter implementation)
pub use ports::EntityStore;

pub use error::ApplicationError;
