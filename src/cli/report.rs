//! Terminal output for commands.
//!
//! Kept out of `core` so the extraction engine can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::{AliasConflict, FileWarning, IgnoreFileUpdate, NamespaceFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_warning(message: &str) {
    print_warning_to(message, &mut io::stderr().lock());
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print an input error that stops a command before it does any work.
pub fn print_failure(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        FAILURE_MARK.red(),
        format!("Error: {}", message).red()
    );
}

pub fn print_file_warnings(warnings: &[FileWarning]) {
    let mut stderr = io::stderr().lock();
    for warning in warnings {
        print_warning_to(
            &format!("Failed to read {}: {}", warning.file_path, warning.error),
            &mut stderr,
        );
    }
}

pub fn print_alias_conflicts(conflicts: &[AliasConflict]) {
    let mut stderr = io::stderr().lock();
    for conflict in conflicts {
        print_warning_to(
            &format!(
                "alias '{}' in {} now maps to '{}' (was '{}')",
                conflict.alias,
                conflict.file_path,
                conflict.namespace,
                conflict.previous_namespace
            ),
            &mut stderr,
        );
    }
}

pub fn print_ignore_update(update: IgnoreFileUpdate, ignore_file: &str, pattern: &str) {
    print_ignore_update_to(update, ignore_file, pattern, &mut io::stdout().lock());
}

pub fn print_ignore_update_to<W: Write>(
    update: IgnoreFileUpdate,
    ignore_file: &str,
    pattern: &str,
    writer: &mut W,
) {
    match update {
        IgnoreFileUpdate::Created => {
            let _ = writeln!(writer, "Created {} and added {}", ignore_file, pattern);
        }
        IgnoreFileUpdate::Appended => {
            let _ = writeln!(writer, "Added {} to {}", pattern, ignore_file);
        }
        IgnoreFileUpdate::AlreadyPresent => {}
    }
}

pub fn print_namespace_files_to<W: Write>(files: &[NamespaceFile], writer: &mut W) {
    for file in files {
        let _ = writeln!(
            writer,
            "Generated {} with {} keys",
            file.path.display(),
            file.key_count
        );
    }
}

pub fn print_extract_summary(files: &[NamespaceFile], key_count: usize) {
    print_extract_summary_to(files, key_count, &mut io::stdout().lock());
}

pub fn print_extract_summary_to<W: Write>(
    files: &[NamespaceFile],
    key_count: usize,
    writer: &mut W,
) {
    print_namespace_files_to(files, writer);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} translation {} into {} {}",
            key_count,
            if key_count == 1 { "key" } else { "keys" },
            files.len(),
            if files.len() == 1 {
                "namespace"
            } else {
                "namespaces"
            }
        )
        .green()
    );
}

pub fn print_merge_summary(file_count: usize, output: &Path, key_count: usize) {
    print_merge_summary_to(file_count, output, key_count, &mut io::stdout().lock());
}

pub fn print_merge_summary_to<W: Write>(
    file_count: usize,
    output: &Path,
    key_count: usize,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Merged {} {} into {} with {} {}",
            file_count,
            if file_count == 1 { "file" } else { "files" },
            output.display(),
            key_count,
            if key_count == 1 { "key" } else { "keys" }
        )
        .green()
    );
}
