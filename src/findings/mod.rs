use serde::{Deserialize, Serialize};

use crate::error::{CurationError, Result};

pub mod loader;

// Re-export from loader
pub use loader::{find_findings_file, load_findings};

/// ファイル内の行範囲（1始まり、両端を含む）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextLocation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl TextLocation {
    /// Construct a location, rejecting inverted or zero-based ranges.
    pub fn new(path: impl Into<String>, start_line: usize, end_line: usize) -> Result<Self> {
        let location = Self {
            path: path.into(),
            start_line,
            end_line,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check the range invariants; used after deserialization as well.
    pub fn validate(&self) -> Result<()> {
        if self.start_line < 1 {
            return Err(CurationError::Validation(format!(
                "start_line must be >= 1, got {} for '{}'",
                self.start_line, self.path
            )));
        }
        if self.start_line > self.end_line {
            return Err(CurationError::Validation(format!(
                "start_line {} is after end_line {} for '{}'",
                self.start_line, self.end_line, self.path
            )));
        }
        Ok(())
    }

    /// Number of lines covered by this location.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// スキャナが検出したライセンス（場所付き）
///
/// The license is SPDX-expression-shaped text compared as an opaque
/// string; the engine never parses or normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseFinding {
    pub license: String,
    #[serde(flatten)]
    pub location: TextLocation,
}

impl LicenseFinding {
    pub fn new(license: impl Into<String>, location: TextLocation) -> Self {
        Self {
            license: license.into(),
            location,
        }
    }
}

/// Scanner output as handed to the engine: one record per detected
/// license region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerReport {
    /// Name/version of the scanner that produced the findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner: Option<String>,
    pub license_findings: Vec<LicenseFinding>,
}

impl ScannerReport {
    /// Validate every finding's location against the model invariants.
    pub fn validate(&self) -> Result<()> {
        for finding in &self.license_findings {
            finding.location.validate()?;
        }
        Ok(())
    }
}
