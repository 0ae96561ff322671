use glob::{MatchOptions, Pattern};

use super::config::LicenseFindingCuration;
use crate::findings::LicenseFinding;

/// Glob options for path patterns: `*` and `?` stay within one path
/// segment, while `**` spans any number of segments (including zero).
const PATH_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// パスパターンがパスにマッチするかチェック
///
/// Separators are normalized to forward slashes before matching, so
/// Windows-style paths from a scanner compare like everything else.
pub fn path_matches(pattern: &str, path: &str) -> bool {
    let normalized;
    let path = if path.contains('\\') {
        normalized = path.replace('\\', "/");
        normalized.as_str()
    } else {
        path
    };

    match Pattern::new(pattern) {
        Ok(pattern) => pattern.matches_with(path, PATH_MATCH_OPTIONS),
        Err(_) => false,
    }
}

impl LicenseFindingCuration {
    /// このルールが検出結果にマッチするかチェック
    ///
    /// All constraints are combined with AND; an unset constraint always
    /// passes. There is no partial credit.
    pub fn matches(&self, finding: &LicenseFinding) -> bool {
        if let Some(detected) = &self.detected_license {
            if detected != &finding.license {
                return false;
            }
        }

        if !path_matches(&self.path, &finding.location.path) {
            return false;
        }

        if !self.start_lines.is_empty()
            && !self.start_lines.contains(&finding.location.start_line)
        {
            return false;
        }

        if let Some(line_count) = self.line_count {
            if line_count != finding.location.line_count() {
                return false;
            }
        }

        true
    }

    /// Apply this rule to a single finding.
    ///
    /// Returns the finding unchanged when the rule does not match
    /// (callers needing the distinction call [`matches`](Self::matches)
    /// first), `None` when the rule removes the finding, and a
    /// relicensed finding at the same location otherwise.
    pub fn apply(&self, finding: &LicenseFinding) -> Option<LicenseFinding> {
        if !self.matches(finding) {
            return Some(finding.clone());
        }

        if self.is_removal() {
            return None;
        }

        Some(LicenseFinding::new(
            self.concluded_license.clone(),
            finding.location.clone(),
        ))
    }
}
