//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan `.tsx` sources and write one JSON dictionary per namespace
//! - `merge`: Merge several JSON dictionaries into one
//! - `init`: Initialize a metadev configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// JSON dictionaries to merge, in priority order
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,

    /// Output file path (defaults to a random name if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract useTranslation keys into one JSON file per namespace
    #[command(alias = "i18n")]
    Extract,
    /// Merge JSON dictionaries, keeping the first non-empty value per key
    #[command(alias = "join-i18n")]
    Merge(MergeCommand),
    /// Initialize a new .metadevrc.json configuration file
    Init,
}
