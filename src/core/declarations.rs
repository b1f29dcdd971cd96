//! Alias declaration collector.
//!
//! Finds `const { t: alias } = useTranslation('namespace')` bindings. The
//! match is purely textual: no scoping, no multi-line or renamed imports.

use std::{path::PathBuf, sync::LazyLock};

use regex::Regex;

use super::{AliasMap, FileWarning, read_source};

/// `const { t: <alias> } = useTranslation('<namespace>')`, either quote style,
/// free whitespace around punctuation.
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"const\s*\{\s*t:\s*([A-Za-z0-9_]+)\s*\}\s*=\s*useTranslation\s*\(\s*['"]([^'"]+)['"]\s*\)"#,
    )
    .unwrap()
});

/// An alias redeclared in a later file with a different namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    pub alias: String,
    /// Namespace that won (from `file_path`).
    pub namespace: String,
    /// Namespace that was overwritten.
    pub previous_namespace: String,
    pub file_path: String,
}

#[derive(Debug, Default)]
pub struct CollectResult {
    pub aliases: AliasMap,
    pub conflicts: Vec<AliasConflict>,
    pub warnings: Vec<FileWarning>,
}

/// Extract alias bindings from one file's content.
///
/// A later declaration of the same alias in the same content wins.
pub fn collect_declarations(content: &str) -> AliasMap {
    let mut aliases = AliasMap::new();
    for caps in DECLARATION_REGEX.captures_iter(content) {
        aliases.insert(caps[1].to_string(), caps[2].to_string());
    }
    aliases
}

/// Fold the declarations of every file into one project-wide map.
///
/// Files are processed in the given order and the last writer wins per alias.
/// Overwrites that change an alias' namespace are recorded as conflicts.
pub fn collect_project_aliases(files: &[PathBuf]) -> CollectResult {
    let mut result = CollectResult::default();

    for path in files {
        let content = match read_source(path) {
            Ok(content) => content,
            Err(warning) => {
                result.warnings.push(warning);
                continue;
            }
        };

        let mut declared: Vec<(String, String)> =
            collect_declarations(&content).into_iter().collect();
        declared.sort();

        for (alias, namespace) in declared {
            if let Some(previous) = result.aliases.get(&alias)
                && *previous != namespace
            {
                result.conflicts.push(AliasConflict {
                    alias: alias.clone(),
                    namespace: namespace.clone(),
                    previous_namespace: previous.clone(),
                    file_path: path.display().to_string(),
                });
            }
            result.aliases.insert(alias, namespace);
        }
    }

    result
}
