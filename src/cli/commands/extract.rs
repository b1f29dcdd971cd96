use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::{exit_status::ExitStatus, report};
use crate::{
    config::{Config, load_config},
    core::{
        extract_translation_keys, group_by_namespace, scan_files, setup_output_dir,
        update_ignore_file, write_namespace_files,
    },
};

pub fn extract() -> Result<ExitStatus> {
    let root = env::current_dir().context("Failed to get working directory")?;
    let config = load_config(&root)?;
    extract_in(&root, &config)
}

/// Run the full extraction rooted at `root`.
///
/// Per-file read failures are printed as warnings; setup and write failures abort.
pub fn extract_in(root: &Path, config: &Config) -> Result<ExitStatus> {
    let scan = scan_files(root, &config.extensions, &config.skip_dirs);
    for skipped in &scan.skipped {
        report::print_warning(&format!("Cannot access path: {}", skipped));
    }

    let (collected, resolved) = extract_translation_keys(&scan.files, &config.default_namespace);
    report::print_file_warnings(&collected.warnings);
    report::print_alias_conflicts(&collected.conflicts);
    report::print_file_warnings(&resolved.warnings);

    let output_dir = root.join(&config.output_dir);
    setup_output_dir(&output_dir)?;

    let pattern = config.ignore_pattern();
    let update = update_ignore_file(&root.join(&config.ignore_file), &pattern)?;
    report::print_ignore_update(update, &config.ignore_file, &pattern);

    let groups = group_by_namespace(&resolved.entries);
    let written = write_namespace_files(&output_dir, &groups)?;
    report::print_extract_summary(&written, resolved.entries.len());

    Ok(ExitStatus::Success)
}
