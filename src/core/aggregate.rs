use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{Dictionary, ExtractedEntry, write_dictionary};

/// A namespace file produced by [`write_namespace_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFile {
    pub namespace: String,
    pub path: PathBuf,
    pub key_count: usize,
}

/// Group entries by namespace, deduplicating keys. Every value is empty.
pub fn group_by_namespace(entries: &[ExtractedEntry]) -> BTreeMap<String, Dictionary> {
    let mut groups: BTreeMap<String, Dictionary> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.namespace.clone())
            .or_default()
            .entry(entry.key.clone())
            .or_default();
    }
    groups
}

pub fn setup_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))
}

/// Write one `<namespace>.json` per group into `output_dir`.
///
/// Existing files are overwritten wholesale; hand-edited values are not kept.
pub fn write_namespace_files(
    output_dir: &Path,
    groups: &BTreeMap<String, Dictionary>,
) -> Result<Vec<NamespaceFile>> {
    let mut written = Vec::with_capacity(groups.len());

    for (namespace, dictionary) in groups {
        let path = output_dir.join(format!("{}.json", namespace));
        write_dictionary(&path, dictionary)
            .with_context(|| format!("Failed to write namespace '{}'", namespace))?;
        written.push(NamespaceFile {
            namespace: namespace.clone(),
            path,
            key_count: dictionary.len(),
        });
    }

    Ok(written)
}
