use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::{CurationsFile, LicenseFindingCuration};

impl CurationsFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read curations file: {}", path.as_ref().display()))?;

        let curations: CurationsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse curations file: {}", path.as_ref().display()))?;

        curations
            .validate()
            .with_context(|| format!("Invalid curation in {}", path.as_ref().display()))?;

        Ok(curations)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize curations")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write curations file: {}", path.as_ref().display()))?;

        Ok(())
    }
}

pub fn default_curations_file_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("curations.toml")
}

/// Append one rule to an existing curations file.
///
/// Goes through toml_edit rather than a parse/re-serialize round trip:
/// curations files are human-maintained and their comments and
/// formatting must survive the edit.
pub fn append_curation<P: AsRef<Path>>(path: P, curation: &LicenseFindingCuration) -> Result<()> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        anyhow::bail!(
            "Curations file not found: {}. Run 'license-curator init' first.",
            path_ref.display()
        );
    }

    curation.validate()?;

    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read curations file: {}", path_ref.display()))?;

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse curations file: {}", path_ref.display()))?;

    if !doc.contains_key("curations") {
        doc["curations"] = toml_edit::Item::ArrayOfTables(toml_edit::ArrayOfTables::new());
    }

    let curations = doc["curations"]
        .as_array_of_tables_mut()
        .ok_or_else(|| anyhow::anyhow!("'curations' is not an array of [[curations]] tables"))?;

    curations.push(curation_to_table(curation));

    fs::write(path_ref, doc.to_string())
        .with_context(|| format!("Failed to write curations file: {}", path_ref.display()))?;

    Ok(())
}

fn curation_to_table(curation: &LicenseFindingCuration) -> toml_edit::Table {
    let mut table = toml_edit::Table::new();

    table["path"] = toml_edit::value(curation.path.as_str());
    if !curation.start_lines.is_empty() {
        let mut lines = toml_edit::Array::new();
        for line in &curation.start_lines {
            lines.push(*line as i64);
        }
        table["start_lines"] = toml_edit::value(lines);
    }
    if let Some(line_count) = curation.line_count {
        table["line_count"] = toml_edit::value(line_count as i64);
    }
    if let Some(detected) = &curation.detected_license {
        table["detected_license"] = toml_edit::value(detected.as_str());
    }
    table["concluded_license"] = toml_edit::value(curation.concluded_license.as_str());
    table["reason"] = toml_edit::value(curation.reason.as_str());
    if !curation.comment.is_empty() {
        table["comment"] = toml_edit::value(curation.comment.as_str());
    }

    table
}
