//! Command-line interface layer.
//!
//! Parses arguments, dispatches commands and prints results. The extraction
//! engine itself lives in [`crate::core`].

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, MergeCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}
