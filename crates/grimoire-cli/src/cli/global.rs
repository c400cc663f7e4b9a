//! Flags shared by every `grimoire` subcommand.
//!
//! Flattened into [`super::Cli`]; each one is marked `global` so it may
//! appear before or after the subcommand name.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more. Repeat for debug (`-vv`) or trace (`-vvv`) events.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more detail (repeatable)",
        long_help = "Raise the log level on stderr:
    default  warnings and errors
    -v       record creation and roster import summaries
    -vv      validation and config diagnostics
    -vvv     everything"
    )]
    pub verbose: u8,

    /// Print errors only.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain text without ANSI styling. Set by `NO_COLOR` as well.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colours"
    )]
    pub no_color: bool,

    /// Read settings from this file instead of the usual locations.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this config file"
    )]
    pub config: Option<PathBuf>,

    /// Rendering for command results. `auto` takes `output.format` from the
    /// config and falls back to `human` on a terminal, `plain` otherwise.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Styled text for a terminal.
    Human,
    /// Unstyled text for pipes and logs.
    Plain,
    /// Pretty-printed JSON on stdout.
    Json,
}
