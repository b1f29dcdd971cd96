use anyhow::Result;

use super::super::{args::MergeCommand, exit_status::ExitStatus, report};
use crate::core::{
    merge::{merge_files, resolve_output_path, validate_inputs},
    write_dictionary,
};

pub fn merge(cmd: MergeCommand) -> Result<ExitStatus> {
    if let Err(invalid) = validate_inputs(&cmd.files) {
        report::print_failure(&invalid.to_string());
        return Ok(ExitStatus::Failure);
    }

    // Everything is read and merged before the output path is touched.
    let merged = merge_files(&cmd.files)?;
    let output = resolve_output_path(cmd.output.as_deref())?;
    write_dictionary(&output, &merged)?;

    report::print_merge_summary(cmd.files.len(), &output, merged.len());
    Ok(ExitStatus::Success)
}
