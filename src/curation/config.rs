use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::{CurationError, Result};

/// `concluded_license` にこの値を指定すると検出結果を削除する
///
/// The comparison is an exact, case-sensitive string match.
pub const REMOVE_LICENSE: &str = "NONE";

fn default_path_pattern() -> String {
    "**".to_string()
}

/// キュレーションの理由タグ（閉じた集合）
///
/// Unknown tags fail deserialization, so a typo in a curations file is
/// rejected at load time rather than silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurationReason {
    /// The scanner detected the wrong license
    IncorrectDetection,
    /// The scanner missed a license that is present
    NotDetected,
    /// Detected text does not correspond to the actual license terms
    LicenseTextMismatch,
    /// Anything else; explain in `comment`
    Other,
}

impl CurationReason {
    /// The tag as written in curations files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurationReason::IncorrectDetection => "incorrect-detection",
            CurationReason::NotDetected => "not-detected",
            CurationReason::LicenseTextMismatch => "license-text-mismatch",
            CurationReason::Other => "other",
        }
    }
}

/// 人手で作成されたキュレーションルール
///
/// A curation is a predicate (which findings it targets) plus an action
/// (replace the license, or remove the finding). Unset optional fields
/// are unconstrained, never "matches nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFindingCuration {
    /// Glob pattern matched against the finding's path ("**" = any)
    #[serde(default = "default_path_pattern")]
    pub path: String,
    /// Start lines the finding must begin at; empty = unconstrained
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start_lines: Vec<usize>,
    /// Exact line count the finding must span; absent = unconstrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    /// Detected license the rule applies to; absent = unconstrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_license: Option<String>,
    /// Replacement license, or [`REMOVE_LICENSE`] to drop the finding
    pub concluded_license: String,
    pub reason: CurationReason,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl LicenseFindingCuration {
    /// Whether this rule removes matched findings instead of relicensing.
    pub fn is_removal(&self) -> bool {
        self.concluded_license == REMOVE_LICENSE
    }

    /// Validate a rule at load time so the engine never sees a
    /// malformed one.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Pattern::new(&self.path) {
            return Err(CurationError::Validation(format!(
                "invalid path pattern '{}': {}",
                self.path, e
            )));
        }
        if self.concluded_license.trim().is_empty() {
            return Err(CurationError::Validation(
                "concluded_license must not be empty".to_string(),
            ));
        }
        if let Some(detected) = &self.detected_license {
            if detected.trim().is_empty() {
                return Err(CurationError::Validation(
                    "detected_license must not be empty when present".to_string(),
                ));
            }
        }
        if self.start_lines.iter().any(|&line| line < 1) {
            return Err(CurationError::Validation(format!(
                "start_lines must all be >= 1 in rule for '{}'",
                self.path
            )));
        }
        if self.line_count == Some(0) {
            return Err(CurationError::Validation(format!(
                "line_count must be >= 1 in rule for '{}'",
                self.path
            )));
        }
        Ok(())
    }
}

/// キュレーションファイル全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurationsFile {
    #[serde(default)]
    pub curations: Vec<LicenseFindingCuration>,
}

impl CurationsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_curation(&mut self, curation: LicenseFindingCuration) {
        self.curations.push(curation);
    }

    /// Validate every rule, reporting the first offending index.
    pub fn validate(&self) -> Result<()> {
        for (index, curation) in self.curations.iter().enumerate() {
            curation.validate().map_err(|e| {
                CurationError::Validation(format!("curation #{}: {}", index + 1, e))
            })?;
        }
        Ok(())
    }
}
