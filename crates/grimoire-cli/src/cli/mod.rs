//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use grimoire_core::domain::{EntityKind, PlayerDto, RuleId};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "grimoire",
    bin_name = "grimoire",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2728} Constraint-checked players, spells and spellbooks",
    long_about = "Grimoire validates player, magic spell and spellbook records \
                  against their field constraints and turns valid records into \
                  domain entities.",
    after_help = "EXAMPLES:\n\
        \x20 grimoire check  --first-name Lance --last-name Skyrunner --level 2\n\
        \x20 grimoire create --first-name Lance --last-name Skyrunner --level 2 --coins 250000\n\
        \x20 grimoire rules\n\
        \x20 grimoire roster ./rosters/\n\
        \x20 grimoire completions bash > /usr/share/bash-completion/completions/grimoire",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report every constraint a player record violates.
    #[command(
        about = "Check a player record against its constraints",
        after_help = "EXAMPLES:\n\
            \x20 grimoire check --first-name Lance --last-name Skyrunner --level 2\n\
            \x20 grimoire check --first-name '' --last-name Al --level 13 --output-format json"
    )]
    Check(PlayerArgs),

    /// Validate and create a player.
    #[command(
        visible_alias = "new",
        about = "Create a player",
        after_help = "EXAMPLES:\n\
            \x20 grimoire create --first-name Lance --last-name Skyrunner --level 2\n\
            \x20 grimoire create --first-name Mira --last-name Dawnstrider --level 5 \\\n\
            \x20     --experience-points 1200 --health 80 --magic-energy 40 --coins 500"
    )]
    Create(CreateArgs),

    /// List the constraint registry.
    #[command(
        visible_alias = "ls",
        about = "List field constraints",
        after_help = "EXAMPLES:\n\
            \x20 grimoire rules\n\
            \x20 grimoire rules --entity player\n\
            \x20 grimoire rules --rule levelValue\n\
            \x20 grimoire rules --output-format json"
    )]
    Rules(RulesArgs),

    /// Import a roster file or directory and print every spell holding.
    #[command(
        about = "Import a roster",
        after_help = "EXAMPLES:\n\
            \x20 grimoire roster party.toml\n\
            \x20 grimoire roster ./rosters/\n\
            \x20 GRIMOIRE_ROSTER=party.toml grimoire roster"
    )]
    Roster(RosterArgs),

    /// Initialise a Grimoire configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 grimoire init           # default location\n\
            \x20 grimoire init --local   # .grimoire.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 grimoire completions bash > ~/.local/share/bash-completion/completions/grimoire\n\
            \x20 grimoire completions zsh  > ~/.zfunc/_grimoire\n\
            \x20 grimoire completions fish > ~/.config/fish/completions/grimoire.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Grimoire configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 grimoire config get output.format\n\
            \x20 grimoire config list\n\
            \x20 grimoire config path"
    )]
    Config(ConfigCommands),
}

// ── check / create ────────────────────────────────────────────────────────────

/// The constrained player fields, shared by `check` and `create`.
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// First name (1 to 15 characters).
    #[arg(long = "first-name", value_name = "NAME", help = "First name")]
    pub first_name: String,

    /// Last name (3 to 20 characters).
    #[arg(long = "last-name", value_name = "NAME", help = "Last name")]
    pub last_name: String,

    /// Level (at most 12).
    #[arg(
        long = "level",
        value_name = "LEVEL",
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Player level"
    )]
    pub level: i32,
}

impl PlayerArgs {
    /// Build a transport record from the flags.
    pub fn to_dto(&self) -> PlayerDto {
        PlayerDto::new(self.first_name.as_str(), self.last_name.as_str(), self.level)
    }
}

/// Arguments for `grimoire create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub player: PlayerArgs,

    #[arg(
        long = "experience-points",
        value_name = "XP",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub experience_points: i64,

    #[arg(long = "health", default_value_t = 0, allow_negative_numbers = true)]
    pub health: i32,

    #[arg(
        long = "magic-energy",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub magic_energy: i32,

    #[arg(long = "coins", default_value_t = 0, allow_negative_numbers = true)]
    pub coins: i64,
}

impl CreateArgs {
    /// Build a transport record from the flags, unconstrained fields included.
    pub fn to_dto(&self) -> PlayerDto {
        PlayerDto {
            experience_points: self.experience_points,
            health: self.health,
            magic_energy: self.magic_energy,
            coins: self.coins,
            ..self.player.to_dto()
        }
    }
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `grimoire rules`.
///
/// Both filters parse through the domain's own `FromStr` impls, so an
/// unknown name is rejected by clap with the domain's message.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only list rules for one entity (`player`, `spell`, `holding`).
    #[arg(
        short = 'e',
        long = "entity",
        value_name = "ENTITY",
        help = "Filter by entity"
    )]
    pub entity: Option<EntityKind>,

    /// Only list one rule id (`correctLength`, `levelValue`).
    #[arg(short = 'r', long = "rule", value_name = "RULE", help = "Filter by rule id")]
    pub rule: Option<RuleId>,
}

// ── roster ────────────────────────────────────────────────────────────────────

/// Arguments for `grimoire roster`.
#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Roster file or directory.  Falls back to the configured roster path.
    #[arg(value_name = "PATH", help = "Roster .toml file or directory")]
    pub path: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `grimoire init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.grimoire.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `grimoire completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `grimoire config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from([
            "grimoire",
            "check",
            "--first-name",
            "Lance",
            "--last-name",
            "Skyrunner",
            "--level",
            "2",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.to_dto(), PlayerDto::new("Lance", "Skyrunner", 2));
    }

    #[test]
    fn level_defaults_to_one() {
        let cli = Cli::parse_from([
            "grimoire",
            "check",
            "--first-name",
            "Lance",
            "--last-name",
            "Skyrunner",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.level, 1);
    }

    #[test]
    fn negative_level_is_accepted_by_the_parser() {
        let cli = Cli::parse_from([
            "grimoire",
            "check",
            "--first-name",
            "Lance",
            "--last-name",
            "Skyrunner",
            "--level",
            "-3",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.level, -3);
    }

    #[test]
    fn create_carries_unconstrained_fields() {
        let cli = Cli::parse_from([
            "grimoire",
            "create",
            "--first-name",
            "Lance",
            "--last-name",
            "Skyrunner",
            "--level",
            "3",
            "--experience-points",
            "1000",
            "--coins",
            "250000",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        let dto = args.to_dto();
        assert_eq!(dto.level, 3);
        assert_eq!(dto.experience_points, 1000);
        assert_eq!(dto.coins, 250_000);
        assert_eq!(dto.health, 0);
    }

    #[test]
    fn entity_aliases() {
        let cli = Cli::parse_from(["grimoire", "rules", "-e", "spell"]);
        let Commands::Rules(args) = cli.command else {
            panic!("expected Rules command");
        };
        assert_eq!(args.entity, Some(EntityKind::MagicSpell));

        let cli = Cli::parse_from(["grimoire", "rules", "--entity", "player-magic-spell"]);
        let Commands::Rules(args) = cli.command else {
            panic!("expected Rules command");
        };
        assert_eq!(args.entity, Some(EntityKind::PlayerMagicSpell));
    }

    #[test]
    fn rule_filter_uses_wire_names() {
        let cli = Cli::parse_from(["grimoire", "rules", "--rule", "levelValue"]);
        let Commands::Rules(args) = cli.command else {
            panic!("expected Rules command");
        };
        assert_eq!(args.rule, Some(RuleId::LevelValue));
        assert!(Cli::try_parse_from(["grimoire", "rules", "--rule", "LevelValue"]).is_err());
    }

    #[test]
    fn unknown_entity_is_rejected_with_domain_message() {
        let err = Cli::try_parse_from(["grimoire", "rules", "--entity", "goblin"]).unwrap_err();
        assert!(err.to_string().contains("Unknown entity 'goblin'"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["grimoire", "--quiet", "--verbose", "rules"]);
        assert!(result.is_err());
    }
}
