//! Translation call resolver.
//!
//! Matches every call-shaped token whose name starts with `t`, not just aliases
//! with a known declaration: the declaration often lives in a parent component
//! while the alias is only used here.

use std::{path::PathBuf, sync::LazyLock};

use regex::Regex;

use super::{AliasMap, ExtractedEntry, FileWarning, read_source};

/// `t<Alias>('<key>')`, either quote style, single literal argument.
static CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(t[A-Za-z][A-Za-z0-9]*)\s*\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap()
});

#[derive(Debug, Default)]
pub struct ResolveResult {
    pub entries: Vec<ExtractedEntry>,
    pub warnings: Vec<FileWarning>,
}

/// Resolve an alias to its namespace.
///
/// Declared aliases use their declared namespace. Otherwise the leading `t`
/// is stripped and the rest lowercased (`tAgent` -> `agent`); a bare `t`
/// falls back to `default_namespace`.
pub fn resolve_namespace(alias: &str, aliases: &AliasMap, default_namespace: &str) -> String {
    if let Some(namespace) = aliases.get(alias) {
        return namespace.clone();
    }

    match alias.strip_prefix('t') {
        Some(rest) if !rest.is_empty() => rest.to_lowercase(),
        _ => default_namespace.to_string(),
    }
}

/// Extract every translation call in `content`, in file order.
pub fn extract_keys(
    content: &str,
    file_path: &str,
    aliases: &AliasMap,
    default_namespace: &str,
) -> Vec<ExtractedEntry> {
    CALL_REGEX
        .captures_iter(content)
        .map(|caps| ExtractedEntry {
            key: caps[2].to_string(),
            namespace: resolve_namespace(&caps[1], aliases, default_namespace),
            file_path: file_path.to_string(),
        })
        .collect()
}

/// Second pass: extract call sites from every file using the project-wide map.
pub fn extract_project_keys(
    files: &[PathBuf],
    aliases: &AliasMap,
    default_namespace: &str,
) -> ResolveResult {
    let mut result = ResolveResult::default();

    for path in files {
        match read_source(path) {
            Ok(content) => {
                let file_path = path.display().to_string();
                result.entries.extend(extract_keys(
                    &content,
                    &file_path,
                    aliases,
                    default_namespace,
                ));
            }
            Err(warning) => result.warnings.push(warning),
        }
    }

    result
}
