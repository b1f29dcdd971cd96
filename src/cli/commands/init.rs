use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::print_failure(&format!("{} already exists", CONFIG_FILE_NAME));
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        report::SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
