use crate::curation::CurationResult;
use crate::report::CurationReport;

pub fn format_table_output(report: &CurationReport, verbose: bool) -> String {
    let mut output = String::new();

    // Summary header
    let summary = &report.summary;
    output.push_str(&format!(
        "📋 Curation Summary ({} findings)\n",
        summary.total_findings
    ));
    output.push_str(&format!(
        "✏️ {} curated  🗑 {} removed  ✅ {} untouched\n\n",
        summary.curated, summary.removed, summary.pass_through
    ));

    if verbose {
        // Show every result, pass-throughs included
        output.push_str("📋 All Results:\n");
        output.push_str(&format_result_table(&report.results, true));
    } else {
        // Show only findings a rule actually changed
        let decisions: Vec<CurationResult> = report
            .results
            .iter()
            .filter(|r| !r.is_pass_through())
            .cloned()
            .collect();

        if decisions.is_empty() {
            output.push_str("✅ No curations applied; all findings passed through unchanged.\n");
        } else {
            output.push_str("✏️  Curated Findings:\n");
            output.push_str(&format_result_table(&decisions, false));
        }

        if report.results.len() > decisions.len() {
            output.push_str(&format!(
                "\n💡 Run with --verbose to see all {} results\n",
                report.results.len()
            ));
        }
    }

    if !summary.unused_curations.is_empty() {
        output.push_str(&format!(
            "\n⚠️  {} curation(s) matched no finding: {}\n",
            summary.unused_curations.len(),
            summary
                .unused_curations
                .iter()
                .map(|i| format!("#{}", i + 1))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    output
}

fn format_result_table(results: &[CurationResult], show_pass_through: bool) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }

    let mut output = String::new();

    // Table header
    output.push_str("┌─────────────────────┬─────────┬─────────────┬─────────────┬────────────┐\n");
    output.push_str("│ Path                │ Lines   │ Detected    │ Concluded   │ Rules      │\n");
    output.push_str("├─────────────────────┼─────────┼─────────────┼─────────────┼────────────┤\n");

    // Table rows
    for result in results {
        if !show_pass_through && result.is_pass_through() {
            continue;
        }

        // A removed result has no curated finding; report the location
        // of the finding it removed instead
        let location = result
            .curated_finding
            .as_ref()
            .map(|f| &f.location)
            .or_else(|| result.original_findings.first().map(|p| &p.finding.location));

        let (path, lines) = match location {
            Some(location) => (
                location.path.clone(),
                format!("{}-{}", location.start_line, location.end_line),
            ),
            None => ("(unknown)".to_string(), String::new()),
        };

        let detected = result
            .original_findings
            .first()
            .map(|p| p.finding.license.clone())
            .or_else(|| result.curated_finding.as_ref().map(|f| f.license.clone()))
            .unwrap_or_else(|| "(unknown)".to_string());

        let concluded = match &result.curated_finding {
            Some(finding) => finding.license.clone(),
            None => "(removed)".to_string(),
        };

        let rules = if result.is_pass_through() {
            "-".to_string()
        } else {
            format!("{} rule(s)", result.original_findings.len())
        };

        output.push_str(&format!(
            "│ {:<19} │ {:<7} │ {:<11} │ {:<11} │ {:<10} │\n",
            truncate(&path, 19),
            truncate(&lines, 7),
            truncate(&detected, 11),
            truncate(&concluded, 11),
            truncate(&rules, 10)
        ));
    }

    // Table footer
    output.push_str("└─────────────────────┴─────────┴─────────────┴─────────────┴────────────┘\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len - 1).collect();
        format!("{}…", prefix)
    }
}
