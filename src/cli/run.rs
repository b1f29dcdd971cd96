use anyhow::Result;

use super::{
    args::Command,
    commands::{extract::extract, init::init, merge::merge},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// Returns `Ok(Failure)` for rejected input and `Err` for fatal errors.
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Extract => extract(),
        Command::Merge(cmd) => merge(cmd),
        Command::Init => init(),
    }
}
