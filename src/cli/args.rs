//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: List strings missing translations (a lone `nb` counts as `no`)
//! - `add`: Add translations from JSON files without overwriting
//! - `normalize`: Rename `nb` records to `no`
//! - `verify`: Strict completeness report plus duplicate key detection
//! - `complete`: check → add → normalize → verify in one run
//! - `init`: Create a `.xcstringsrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Normalize(cmd)) => cmd.common.verbose,
            Some(Command::Verify(cmd)) => cmd.common.verbose,
            Some(Command::Complete(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root to search for the config file and tables (default: current directory)
    #[arg(long, env = "XCSTRINGS_ROOT")]
    pub root: Option<PathBuf>,

    /// UI string catalog path (overrides config file)
    #[arg(long)]
    pub ui_table: Option<PathBuf>,

    /// Main string catalog path (overrides config file)
    #[arg(long)]
    pub main_table: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Injector inputs, one JSON file per table.
#[derive(Debug, Clone, Default, Args)]
pub struct TranslationArgs {
    /// Translations for the UI table ({"key": {"locale": "text"}}, overrides config file)
    #[arg(long = "ui", value_name = "FILE")]
    pub ui: Option<PathBuf>,

    /// Translations for the main table (overrides config file)
    #[arg(long = "main", value_name = "FILE")]
    pub main: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub translations: TranslationArgs,

    /// Report what would be added without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would be renamed without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CompleteCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub translations: TranslationArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for strings missing translations in the target locales
    Check(CheckCommand),
    /// Add translations from JSON files (existing translations are kept)
    Add(AddCommand),
    /// Rename Norwegian Bokmål (nb) records to Norwegian (no)
    Normalize(NormalizeCommand),
    /// Verify all strings are fully translated and report duplicate keys
    Verify(VerifyCommand),
    /// Run check, add, normalize and verify in sequence
    Complete(CompleteCommand),
    /// Initialize a new .xcstringsrc.json configuration file
    Init,
}
