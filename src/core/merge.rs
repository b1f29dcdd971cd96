//! Dictionary merging.
//!
//! Per key, the first non-empty value in input order wins; an empty value is
//! replaced by a later non-empty one.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{Dictionary, read_dictionary};

pub const DICTIONARY_EXTENSION: &str = ".json";

const RANDOM_NAME_PREFIX: &str = "merged_i18n_";

/// Why a merge input was rejected before any work was done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    NotJson(String),
    Missing(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotJson(path) => write!(f, "{} is not a JSON file", path),
            InvalidInput::Missing(path) => write!(f, "File {} does not exist", path),
        }
    }
}

/// Check every input path, stopping at the first invalid one.
pub fn validate_inputs(paths: &[String]) -> Result<(), InvalidInput> {
    for path in paths {
        if !path.ends_with(DICTIONARY_EXTENSION) {
            return Err(InvalidInput::NotJson(path.clone()));
        }
        if !Path::new(path).exists() {
            return Err(InvalidInput::Missing(path.clone()));
        }
    }
    Ok(())
}

/// Fold `incoming` into `merged` under the first-non-empty-wins policy.
pub fn merge_into(merged: &mut Dictionary, incoming: Dictionary) {
    for (key, value) in incoming {
        match merged.get_mut(&key) {
            None => {
                merged.insert(key, value);
            }
            Some(existing) if existing.is_empty() && !value.is_empty() => *existing = value,
            Some(_) => {}
        }
    }
}

pub fn merge_dictionaries(dictionaries: impl IntoIterator<Item = Dictionary>) -> Dictionary {
    let mut merged = Dictionary::new();
    for dictionary in dictionaries {
        merge_into(&mut merged, dictionary);
    }
    merged
}

/// Read and merge `paths` in order. Any unreadable or non-flat file aborts the merge.
pub fn merge_files(paths: &[String]) -> Result<Dictionary> {
    let dictionaries = paths
        .iter()
        .map(|path| read_dictionary(Path::new(path)))
        .collect::<Result<Vec<_>>>()?;
    Ok(merge_dictionaries(dictionaries))
}

/// Output path for a merge: the requested path, or a random name, with `.json` ensured.
pub fn resolve_output_path(output: Option<&str>) -> Result<PathBuf> {
    let mut name = match output {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => random_output_name()?,
    };
    if !name.ends_with(DICTIONARY_EXTENSION) {
        name.push_str(DICTIONARY_EXTENSION);
    }
    Ok(PathBuf::from(name))
}

/// `merged_i18n_` followed by 8 OS-random bytes in hex.
pub fn random_output_name() -> Result<String> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).context("Failed to generate random output file name")?;
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    Ok(format!("{}{}", RANDOM_NAME_PREFIX, hex))
}
