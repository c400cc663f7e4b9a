//! Roster file loader.
//!
//! A roster declares players, spells and which spells each player carries.
//! Entries are keyed so holdings can reference players and spells declared
//! in the same roster (or in a sibling file of a roster directory).
//!
//! # Roster format
//!
//! ```toml
//! [[players]]
//! key              = "lance"          # unique within the roster
//! firstName        = "Lance"
//! lastName         = "Skyrunner"
//! level            = 3
//! experiencePoints = 1000             # optional, defaults to 0
//! coins            = 250000           # optional, defaults to 0
//!
//! [[spells]]
//! key        = "transport"
//! name       = "Transport"
//! castEnergy = 100
//! price      = 120000
//! weight     = 87
//!
//! [[holdings]]
//! player         = "lance"
//! spell          = "transport"
//! remainingCasts = 2
//! ```
//!
//! Field names match the transport JSON shape. Values are not validated here;
//! import hands every record to the services, which apply the constraints.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use grimoire_core::{
    application::{PlayerService, SpellbookService},
    domain::{MagicSpellDto, MagicSpellId, PlayerDto, PlayerId, PlayerMagicSpellDto},
    error::{GrimoireError, GrimoireResult},
};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Failures while reading roster files.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Roster not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate {kind} key '{key}' in roster")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("Directory walk failed under '{path}': {message}")]
    Walk { path: PathBuf, message: String },
}

impl RosterError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { path } => vec![
                format!("Check that '{}' exists", path.display()),
                "Pass a .toml file or a directory containing .toml files".into(),
            ],
            Self::Io { .. } | Self::Walk { .. } => {
                vec!["Check file permissions and try again".into()]
            }
            Self::Parse { .. } => vec![
                "Rosters use [[players]], [[spells]] and [[holdings]] tables".into(),
                "Field names are camelCase: firstName, castEnergy, remainingCasts".into(),
            ],
            Self::DuplicateKey { kind, .. } => {
                vec![format!("Every {kind} key must be unique across the roster")]
            }
        }
    }
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// One roster file as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RosterFile {
    players: Vec<PlayerEntry>,
    spells: Vec<SpellEntry>,
    holdings: Vec<HoldingEntry>,
}

/// `[[players]]` entry: a roster key plus the player transport fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub key: String,
    #[serde(flatten)]
    pub player: PlayerDto,
}

/// `[[spells]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellEntry {
    pub key: String,
    #[serde(flatten)]
    pub spell: MagicSpellDto,
}

/// `[[holdings]]` entry, referencing players and spells by key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingEntry {
    pub player: String,
    pub spell: String,
    #[serde(default)]
    pub remaining_casts: i32,
}

/// Everything declared by one roster file or directory, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub players: Vec<PlayerEntry>,
    pub spells: Vec<SpellEntry>,
    pub holdings: Vec<HoldingEntry>,
}

impl Roster {
    /// Parse a roster from TOML text.
    pub fn from_toml(raw: &str, origin: &Path) -> Result<Self, RosterError> {
        let mut roster = Self::default();
        roster.merge(parse(raw, origin)?)?;
        Ok(roster)
    }

    fn merge(&mut self, file: RosterFile) -> Result<(), RosterError> {
        let mut player_keys: HashSet<String> =
            self.players.iter().map(|p| p.key.clone()).collect();
        for entry in &file.players {
            if !player_keys.insert(entry.key.clone()) {
                return Err(RosterError::DuplicateKey {
                    kind: "player",
                    key: entry.key.clone(),
                });
            }
        }

        let mut spell_keys: HashSet<String> = self.spells.iter().map(|s| s.key.clone()).collect();
        for entry in &file.spells {
            if !spell_keys.insert(entry.key.clone()) {
                return Err(RosterError::DuplicateKey {
                    kind: "spell",
                    key: entry.key.clone(),
                });
            }
        }

        self.players.extend(file.players);
        self.spells.extend(file.spells);
        self.holdings.extend(file.holdings);
        Ok(())
    }

    /// Create every roster entry through the services.
    ///
    /// Players come first, then spells, then holdings. An entry that fails
    /// validation, or a holding whose player or spell key was never created,
    /// is recorded in the report and skipped. Any other failure aborts.
    #[instrument(skip_all, fields(
        players = self.players.len(),
        spells = self.spells.len(),
        holdings = self.holdings.len(),
    ))]
    pub fn import(
        &self,
        players: &PlayerService,
        spellbook: &SpellbookService,
    ) -> GrimoireResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut player_ids: HashMap<&str, PlayerId> = HashMap::new();
        let mut spell_ids: HashMap<&str, MagicSpellId> = HashMap::new();

        for entry in &self.players {
            match players.create_player(entry.player.clone()) {
                Ok(created) => {
                    if let Some(id) = created.id {
                        player_ids.insert(entry.key.as_str(), id);
                    }
                    report.players_created += 1;
                }
                Err(GrimoireError::Domain(err)) => {
                    warn!(key = %entry.key, error = %err, "skipping invalid player");
                    report.skip(&entry.key, err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        for entry in &self.spells {
            let created = spellbook.create_spell(entry.spell.clone())?;
            if let Some(id) = created.id {
                spell_ids.insert(entry.key.as_str(), id);
            }
            report.spells_created += 1;
        }

        for entry in &self.holdings {
            let label = format!("{}/{}", entry.player, entry.spell);
            let (Some(&player_id), Some(&spell_id)) = (
                player_ids.get(entry.player.as_str()),
                spell_ids.get(entry.spell.as_str()),
            ) else {
                warn!(holding = %label, "skipping holding with unresolved key");
                report.skip(&label, "references a player or spell that was not created".into());
                continue;
            };

            spellbook.grant_spell(PlayerMagicSpellDto::new(
                player_id,
                spell_id,
                entry.remaining_casts,
            ))?;
            report.holdings_granted += 1;
        }

        info!(
            players = report.players_created,
            spells = report.spells_created,
            holdings = report.holdings_granted,
            skipped = report.skipped.len(),
            "Roster imported"
        );
        Ok(report)
    }
}

/// One roster entry that was not created, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub key: String,
    pub reason: String,
}

/// Outcome of [`Roster::import`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub players_created: usize,
    pub spells_created: usize,
    pub holdings_granted: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl ImportReport {
    fn skip(&mut self, key: &str, reason: String) {
        self.skipped.push(SkippedEntry {
            key: key.to_string(),
            reason,
        });
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`Roster`] from a `.toml` file or a directory tree of them.
///
/// For a directory, every `*.toml` file is read in file-name order and the
/// results are merged. Files that fail to parse emit a `WARN` log and are
/// skipped; they do not prevent other files from loading. A single file that
/// fails to parse is an error.
pub struct RosterLoader {
    path: PathBuf,
}

impl RosterLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Roster, RosterError> {
        if !self.path.exists() {
            return Err(RosterError::NotFound {
                path: self.path.clone(),
            });
        }

        if self.path.is_file() {
            let raw = read(&self.path)?;
            return Roster::from_toml(&raw, &self.path);
        }

        let mut roster = Roster::default();
        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        for walk_entry in walker {
            let walk_entry = walk_entry.map_err(|e| RosterError::Walk {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
            let path = walk_entry.path();

            if !walk_entry.file_type().is_file() || !is_toml(path) {
                continue;
            }

            match parse(&read(path)?, path) {
                Ok(part) => {
                    debug!(
                        file = %path.display(),
                        players = part.players.len(),
                        spells = part.spells.len(),
                        "loaded roster file"
                    );
                    roster.merge(part)?;
                }
                Err(e @ RosterError::Parse { .. }) => {
                    warn!(file = %path.display(), error = %e, "skipping roster file");
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            players = roster.players.len(),
            spells = roster.spells.len(),
            holdings = roster.holdings.len(),
            "finished loading roster"
        );
        Ok(roster)
    }
}

fn read(path: &Path) -> Result<String, RosterError> {
    fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(raw: &str, origin: &Path) -> Result<RosterFile, RosterError> {
    toml::from_str(raw).map_err(|e| RosterError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
