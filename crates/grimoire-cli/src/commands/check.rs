//! `grimoire check`: report every violated constraint on a player record.

use serde::Serialize;
use tracing::{debug, instrument};

use grimoire_adapters::InMemoryStore;
use grimoire_core::{
    application::PlayerService,
    domain::{EntityKind, FieldViolation, PlayerDto},
};

use crate::{
    cli::PlayerArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a check result.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    entity: EntityKind,
    valid: bool,
    record: &'a PlayerDto,
    violations: &'a [FieldViolation],
}

/// Check a player record without creating it.
///
/// Succeeds only when no constraint is violated.
#[instrument(skip_all, fields(first_name = %args.first_name))]
pub fn execute(args: PlayerArgs, output: OutputManager) -> CliResult<()> {
    let dto = args.to_dto();
    let service = PlayerService::new(Box::new(InMemoryStore::new()));
    let violations = service.check(&dto);
    debug!(count = violations.len(), "Check finished");

    if output.is_json() {
        output.json(&CheckReport {
            entity: EntityKind::Player,
            valid: violations.is_empty(),
            record: &dto,
            violations: &violations,
        })?;
    } else if violations.is_empty() {
        output.success("Player record satisfies every constraint")?;
    } else {
        output.header("Constraint violations:")?;
        for violation in &violations {
            output.error(&describe(violation))?;
        }
    }

    match violations.len() {
        0 => Ok(()),
        count => Err(CliError::ViolationsFound {
            entity: EntityKind::Player,
            count,
        }),
    }
}

fn describe(violation: &FieldViolation) -> String {
    format!(
        "{}: {} ({})",
        violation.field, violation.rule, violation.description
    )
}
