//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`GRIMOIRE_OUTPUT_FORMAT`, `GRIMOIRE_ROSTER`),
//!    including those loaded from `.env`
//! 3. Config file: `--config`, else `.grimoire.toml` in the current
//!    directory, else the per-user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding `output.format`.
pub const ENV_OUTPUT_FORMAT: &str = "GRIMOIRE_OUTPUT_FORMAT";
/// Environment variable overriding `roster.path`.
pub const ENV_ROSTER: &str = "GRIMOIRE_ROSTER";
/// File name of a project-local config.
pub const LOCAL_CONFIG: &str = ".grimoire.toml";

const FORMATS: [&str; 4] = ["auto", "human", "plain", "json"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Roster settings.
    pub roster: RosterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Roster used by `grimoire roster` when no path is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match Self::locate(config_file)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT).filter(|v| !v.is_empty()) {
            self.output.format = format.to_lowercase();
        }
        if let Some(path) = lookup(ENV_ROSTER).filter(|v| !v.is_empty()) {
            self.roster.path = Some(PathBuf::from(path));
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !FORMATS.contains(&self.output.format.as_str()) {
            bail!(
                "Unknown output format '{}' (expected one of: {})",
                self.output.format,
                FORMATS.join(", ")
            );
        }
        Ok(())
    }

    fn locate(config_file: Option<&PathBuf>) -> anyhow::Result<Option<PathBuf>> {
        if let Some(path) = config_file {
            if !path.is_file() {
                bail!("Config file '{}' does not exist", path.display());
            }
            return Ok(Some(path.clone()));
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return Ok(Some(local));
        }

        let global = Self::config_path();
        Ok(global.is_file().then_some(global))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.grimoire.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "grimoire", "grimoire")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
