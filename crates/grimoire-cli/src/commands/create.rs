//! `grimoire create`: validate and create a player.

use tracing::{info, instrument};

use grimoire_adapters::InMemoryStore;
use grimoire_core::{application::PlayerService, domain::PlayerDto};

use crate::{cli::CreateArgs, error::CliResult, output::OutputManager};

/// Create a player from the flags and print the created record.
///
/// A record that violates a constraint is rejected with the first failure,
/// which surfaces as `The constraint was not met: <description>`.
#[instrument(skip_all, fields(first_name = %args.player.first_name))]
pub fn execute(args: CreateArgs, output: OutputManager) -> CliResult<()> {
    let service = PlayerService::new(Box::new(InMemoryStore::new()));
    let created = service.create_player(args.to_dto())?;

    if let Some(id) = created.id {
        info!(%id, "Created via CLI");
    }

    if output.is_json() {
        output.json(&created)?;
        return Ok(());
    }

    output.success(&format!(
        "Created player {} {} (level {})",
        created.first_name, created.last_name, created.level
    ))?;
    for line in summary(&created) {
        output.print(&line)?;
    }
    Ok(())
}

/// Indented field listing for human output.
fn summary(dto: &PlayerDto) -> Vec<String> {
    let id = dto.id.map(|id| id.to_string()).unwrap_or_default();
    vec![
        format!("  id:               {id}"),
        format!("  experiencePoints: {}", dto.experience_points),
        format!("  health:           {}", dto.health),
        format!("  magicEnergy:      {}", dto.magic_energy),
        format!("  coins:            {}", dto.coins),
    ]
}
