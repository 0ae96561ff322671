use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::curation::{apply_all, unused_curations, CurationResult, LicenseFindingCuration};
use crate::findings::LicenseFinding;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurationSummary {
    pub total_findings: usize,
    pub curated: usize,
    pub removed: usize,
    pub pass_through: usize,
    /// Concluded license -> result count, sorted by count descending
    pub concluded_licenses: IndexMap<String, usize>,
    /// Indexes (zero-based, input order) of rules that matched nothing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unused_curations: Vec<usize>,
}

/// 最終レポート（結果・サマリー・生成時刻）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner: Option<String>,
    pub results: Vec<CurationResult>,
    pub summary: CurationSummary,
    pub generated_at: DateTime<Utc>,
}

/// Run the engine and assemble the report consumed by the renderers.
pub fn create_report(
    findings: &[LicenseFinding],
    curations: &[LicenseFindingCuration],
    scanner: Option<String>,
) -> CurationReport {
    let results = apply_all(findings, curations);
    let unused = unused_curations(findings, curations);

    let mut curated = 0;
    let mut removed = 0;
    let mut pass_through = 0;
    let mut license_counts = HashMap::new();

    for result in &results {
        if result.is_removal() {
            removed += 1;
            continue;
        }
        if result.is_pass_through() {
            pass_through += 1;
        } else {
            curated += 1;
        }
        if let Some(finding) = &result.curated_finding {
            *license_counts.entry(finding.license.clone()).or_insert(0) += 1;
        }
    }

    // Convert HashMap to Vec, sort by count (descending), then create IndexMap
    let mut license_vec: Vec<(String, usize)> = license_counts.into_iter().collect();
    license_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let concluded_licenses: IndexMap<String, usize> = license_vec.into_iter().collect();

    CurationReport {
        scanner,
        results,
        summary: CurationSummary {
            total_findings: findings.len(),
            curated,
            removed,
            pass_through,
            concluded_licenses,
            unused_curations: unused,
        },
        generated_at: Utc::now(),
    }
}
