//! One module per subcommand. Handlers translate arguments into service
//! calls and render the results; no business logic lives here.

pub mod check;
pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod roster;
pub mod rules;
