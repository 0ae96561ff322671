use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::LicenseFindingCuration;
use crate::findings::LicenseFinding;

/// One (finding, curation) pair that contributed to a curated outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationProvenance {
    pub finding: LicenseFinding,
    pub curation: LicenseFindingCuration,
}

/// Grouping key for pending outcomes.
///
/// A removal carries the finding it removed, so removals of different
/// findings never collapse into one group; two rules removing the same
/// finding do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CuratedOutcome {
    Present(LicenseFinding),
    Removed(LicenseFinding),
}

/// キュレーション適用の結果（出自付き）
///
/// `curated_finding = None` means the finding was removed. An empty
/// `original_findings` list means no rule matched and the finding
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationResult {
    pub curated_finding: Option<LicenseFinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub original_findings: Vec<CurationProvenance>,
}

impl CurationResult {
    /// Pass-through: present, untouched, and no rule to blame.
    pub fn is_pass_through(&self) -> bool {
        self.curated_finding.is_some() && self.original_findings.is_empty()
    }

    pub fn is_removal(&self) -> bool {
        self.curated_finding.is_none()
    }
}

/// Apply every curation to every finding and group identical outcomes.
///
/// Each finding matched by k rules yields k independent outcomes, one
/// per rule; rules are never combined or short-circuited. Outcomes that
/// are structurally equal merge into one result whose provenance list
/// concatenates all contributing pairs in discovery order (finding
/// input order, then curation input order). Findings matched by no rule
/// appear exactly once, untouched, with empty provenance.
///
/// The match phase runs in parallel across findings; the merge is
/// sequential in input order, so output is deterministic for identical
/// inputs.
pub fn apply_all(
    findings: &[LicenseFinding],
    curations: &[LicenseFindingCuration],
) -> Vec<CurationResult> {
    let pending: Vec<Vec<(CuratedOutcome, Option<CurationProvenance>)>> = findings
        .par_iter()
        .map(|finding| {
            let matching: Vec<&LicenseFindingCuration> =
                curations.iter().filter(|c| c.matches(finding)).collect();

            if matching.is_empty() {
                return vec![(CuratedOutcome::Present(finding.clone()), None)];
            }

            matching
                .into_iter()
                .map(|curation| {
                    let outcome = match curation.apply(finding) {
                        Some(curated) => CuratedOutcome::Present(curated),
                        None => CuratedOutcome::Removed(finding.clone()),
                    };
                    let provenance = CurationProvenance {
                        finding: finding.clone(),
                        curation: curation.clone(),
                    };
                    (outcome, Some(provenance))
                })
                .collect()
        })
        .collect();

    let mut groups: IndexMap<CuratedOutcome, Vec<CurationProvenance>> = IndexMap::new();
    for per_finding in pending {
        for (outcome, provenance) in per_finding {
            let entry = groups.entry(outcome).or_default();
            // Pass-throughs contribute the group but no provenance
            if let Some(provenance) = provenance {
                entry.push(provenance);
            }
        }
    }

    groups
        .into_iter()
        .map(|(outcome, original_findings)| CurationResult {
            curated_finding: match outcome {
                CuratedOutcome::Present(finding) => Some(finding),
                CuratedOutcome::Removed(_) => None,
            },
            original_findings,
        })
        .collect()
}

/// Indexes of curations that matched no finding at all.
///
/// Stale rules usually mean the code they targeted moved; surfacing
/// them keeps the curations file honest.
pub fn unused_curations(
    findings: &[LicenseFinding],
    curations: &[LicenseFindingCuration],
) -> Vec<usize> {
    curations
        .iter()
        .enumerate()
        .filter(|(_, curation)| !findings.iter().any(|finding| curation.matches(finding)))
        .map(|(index, _)| index)
        .collect()
}
