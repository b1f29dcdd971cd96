use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".metadevrc.json";

/// Directories that are never descended into while scanning sources.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    ".next",
    "dist",
    "build",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
}

fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string()]
}

fn default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect()
}

fn default_output_dir() -> String {
    ".i18n".to_string()
}

fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

fn default_namespace() -> String {
    "common".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
            output_dir: default_output_dir(),
            ignore_file: default_ignore_file(),
            default_namespace: default_namespace(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The output directory must stay inside the working directory, since the
    /// ignore-file entry is written relative to it.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.output_dir.trim().is_empty() {
            bail!("'outputDir' must not be empty");
        }
        let output_dir = Path::new(&self.output_dir);
        if output_dir.is_absolute()
            || output_dir
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            bail!(
                "'outputDir' must stay inside the project root: \"{}\"",
                self.output_dir
            );
        }
        if self.default_namespace.is_empty() {
            bail!("'defaultNamespace' must not be empty");
        }
        Ok(())
    }

    /// Line appended to the ignore file, e.g. `.i18n/`.
    pub fn ignore_pattern(&self) -> String {
        format!("{}/", self.output_dir.trim_end_matches('/'))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config file, or defaults when there is none.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
