use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};

/// A flat translation dictionary. `BTreeMap` keeps keys lexically sorted on output.
pub type Dictionary = BTreeMap<String, String>;

/// Read a flat string-to-string JSON object.
///
/// Nested objects, arrays, numbers or a non-object root are rejected.
pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse JSON in file {} (expected a flat object of strings)",
            path.display()
        )
    })
}

/// Write a dictionary as key-sorted JSON with 2-space indentation and a trailing newline.
pub fn write_dictionary(path: &Path, dictionary: &Dictionary) -> Result<()> {
    let content = serde_json::to_string_pretty(dictionary).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
