use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ScannerReport;

/// File names probed when no findings path is given on the command line.
const DEFAULT_FINDINGS_FILES: &[&str] = &["scan-results.json", "findings.json"];

/// Look for a scanner output file in `dir` and its parent directories.
pub fn find_findings_file(dir: &Path) -> Option<PathBuf> {
    let mut current = Some(dir);
    while let Some(dir) = current {
        for name in DEFAULT_FINDINGS_FILES {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        current = dir.parent();
    }
    None
}

/// Load and validate scanner output from a JSON file.
pub fn load_findings<P: AsRef<Path>>(path: P) -> Result<ScannerReport> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        anyhow::bail!("Findings file not found: {}", path_ref.display());
    }

    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read findings file: {}", path_ref.display()))?;

    let report: ScannerReport = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse findings file: {}", path_ref.display()))?;

    // Reject malformed locations here, before they reach the engine
    report
        .validate()
        .with_context(|| format!("Invalid finding in {}", path_ref.display()))?;

    Ok(report)
}
