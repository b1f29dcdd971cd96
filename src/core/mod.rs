//! Extraction and merge engine.
//!
//! Extraction is a two-pass lexical scan over the project sources:
//!
//! 1. **Collect**: every source file is searched for
//!    `const { t: alias } = useTranslation('namespace')` declarations, which
//!    are folded into one project-wide alias map.
//! 2. **Resolve**: every source file is searched again for `tAlias('key')`
//!    calls; each alias is resolved through the map, or through its spelling
//!    when no declaration binds it.
//!
//! The resolved entries are then grouped per namespace and written as flat,
//! key-sorted JSON dictionaries.
//!
//! ## Module Structure
//!
//! - `scanner`: Source file discovery with directory pruning
//! - `declarations`: Alias declaration collector (pass 1)
//! - `resolver`: Translation call resolver (pass 2)
//! - `aggregate`: Grouping and namespace file output
//! - `dictionary`: Flat JSON dictionary reading and writing
//! - `ignore_file`: Ignore-file maintenance for the output directory
//! - `merge`: Dictionary merging with first-non-empty-wins policy

pub mod aggregate;
pub mod declarations;
pub mod dictionary;
pub mod ignore_file;
pub mod merge;
pub mod resolver;
pub mod scanner;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

pub use aggregate::{NamespaceFile, group_by_namespace, setup_output_dir, write_namespace_files};
pub use declarations::{AliasConflict, CollectResult, collect_declarations, collect_project_aliases};
pub use dictionary::{Dictionary, read_dictionary, write_dictionary};
pub use ignore_file::{IgnoreFileUpdate, update_ignore_file};
pub use resolver::{ResolveResult, extract_keys, extract_project_keys, resolve_namespace};
pub use scanner::{ScanResult, scan_files};

/// Project-wide mapping from translation alias to namespace.
pub type AliasMap = HashMap<String, String>;

/// A single translation call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub key: String,
    pub namespace: String,
    pub file_path: String,
}

/// A recoverable failure on one file; the file contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWarning {
    pub file_path: String,
    pub error: String,
}

/// Read a source file, turning an I/O failure into a [`FileWarning`].
///
/// Invalid UTF-8 is replaced rather than rejected, so a stray Latin-1 byte
/// does not hide the rest of the file.
pub(crate) fn read_source(path: &Path) -> Result<String, FileWarning> {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|e| FileWarning {
            file_path: path.display().to_string(),
            error: e.to_string(),
        })
}

/// Run both passes over `files`: collect aliases, then resolve every call site.
pub fn extract_translation_keys(
    files: &[PathBuf],
    default_namespace: &str,
) -> (CollectResult, ResolveResult) {
    let collected = collect_project_aliases(files);
    let resolved = extract_project_keys(files, &collected.aliases, default_namespace);
    (collected, resolved)
}
