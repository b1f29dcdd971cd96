use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

/// What [`update_ignore_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreFileUpdate {
    Created,
    Appended,
    AlreadyPresent,
}

/// Make sure `pattern` is listed in the ignore file at `path`.
///
/// Presence is a substring check, so running twice never adds a second line.
pub fn update_ignore_file(path: &Path, pattern: &str) -> Result<IgnoreFileUpdate> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let (content, update) = match existing {
        Some(content) if content.contains(pattern) => return Ok(IgnoreFileUpdate::AlreadyPresent),
        Some(mut content) => {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(pattern);
            content.push('\n');
            (content, IgnoreFileUpdate::Appended)
        }
        None => (format!("{}\n", pattern), IgnoreFileUpdate::Created),
    };

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(update)
}
