use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Source files in walk order (entries sorted by file name per directory).
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed during the walk.
    pub skipped: Vec<String>,
}

/// Recursively list source files under `base_dir`.
///
/// Directories whose name appears in `skip_dirs` are pruned at any depth;
/// the walk root itself is always entered.
pub fn scan_files(base_dir: &Path, extensions: &[String], skip_dirs: &[String]) -> ScanResult {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, skip_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped.push(e.to_string());
                continue;
            }
        };

        if !entry.file_type().is_dir() && is_source_file(entry.path(), extensions) {
            result.files.push(entry.into_path());
        }
    }

    result
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name))
}

/// Suffix match on the file name, so `.tsx` itself and symlinks count too.
fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            extensions
                .iter()
                .any(|ext| name.ends_with(&format!(".{}", ext)))
        })
}
