//! `grimoire roster`: import a roster and print every spell holding.

use serde::Serialize;
use tracing::{info, instrument};

use grimoire_adapters::{ImportReport, InMemoryStore, RosterLoader};
use grimoire_core::{
    application::{PlayerService, SpellHolding, SpellbookService},
    domain::Player,
};

use crate::{
    cli::RosterArgs,
    config::{AppConfig, ENV_ROSTER},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of an import.
#[derive(Debug, Serialize)]
struct RosterOutput<'a> {
    report: &'a ImportReport,
    holdings: &'a [SpellHolding],
}

#[instrument(skip_all)]
pub fn execute(args: RosterArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = args
        .path
        .or(config.roster.path)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "no roster given; pass a PATH, set {ENV_ROSTER} or roster.path in the config"
            ),
            source: None,
        })?;

    let roster = RosterLoader::new(&path).load()?;

    let players = InMemoryStore::<Player>::new();
    let player_service = PlayerService::new(Box::new(players.clone()));
    let spellbook = SpellbookService::new(
        Box::new(players),
        Box::new(InMemoryStore::new()),
        Box::new(InMemoryStore::new()),
    );

    let report = roster.import(&player_service, &spellbook)?;
    let holdings = spellbook.holdings()?;
    info!(path = %path.display(), holdings = holdings.len(), "Roster processed");

    if output.is_json() {
        output.json(&RosterOutput {
            report: &report,
            holdings: &holdings,
        })?;
        return Ok(());
    }

    for skipped in &report.skipped {
        output.warning(&format!("Skipped {}: {}", skipped.key, skipped.reason))?;
    }
    for holding in &holdings {
        output.print(&holding.to_string())?;
    }
    output.success(&summary(&report))?;
    Ok(())
}

fn summary(report: &ImportReport) -> String {
    format!(
        "Imported {} player(s), {} spell(s), {} holding(s)",
        report.players_created, report.spells_created, report.holdings_granted
    )
}
