use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output format (json, table)
    pub format: Option<String>,

    /// Curations file to apply (default: curations.toml)
    pub curations_file: Option<PathBuf>,

    /// Scanner output to curate (default: auto-detected)
    pub findings_file: Option<PathBuf>,

    /// Exit nonzero when a curation matched no finding
    pub fail_on_unused: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Some("table".to_string()),
            curations_file: None,
            findings_file: None,
            fail_on_unused: Some(false),
        }
    }
}

/// Load configuration from license-curator.toml in the current directory.
pub fn load_config() -> Result<Config> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&dir)
}

/// Load configuration from license-curator.toml in `dir`.
///
/// Settings live under a `[tool.license-curator]` table so the file can
/// be shared with other tooling. Missing file or missing table means
/// defaults.
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let config_path = dir.join("license-curator.toml");

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read license-curator.toml: {}", config_path.display()))?;

    let document: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse license-curator.toml: {}", config_path.display()))?;

    // Extract [tool.license-curator] section
    if let Some(tool) = document.get("tool") {
        if let Some(section) = tool.get("license-curator") {
            let config: Config = section
                .clone()
                .try_into()
                .context("Failed to parse [tool.license-curator] section")?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}
