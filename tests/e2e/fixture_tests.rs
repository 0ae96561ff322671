use super::helpers::TestProject;

#[test]
fn test_fully_constrained_curation_end_to_end() {
    let test_env = TestProject::new();

    test_env.write_findings(
        r#"{
  "license_findings": [
    {"license": "MIT", "path": "a/path", "start_line": 8, "end_line": 13}
  ]
}"#,
    );

    // Every predicate field set; all must hold for the rule to fire
    test_env.write_curations(
        r#"
[[curations]]
path = "**/path"
start_lines = [8]
line_count = 6
detected_license = "MIT"
concluded_license = "Apache-2.0"
reason = "incorrect-detection"
comment = "Wrong header matched"
"#,
    );

    let output = test_env.run(&["apply", "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(result["curated_finding"]["license"], "Apache-2.0");
    assert_eq!(result["curated_finding"]["path"], "a/path");
    assert_eq!(result["curated_finding"]["start_line"], 8);
    assert_eq!(result["curated_finding"]["end_line"], 13);

    let provenance = result["original_findings"].as_array().unwrap();
    assert_eq!(provenance.len(), 1);
    assert_eq!(provenance[0]["finding"]["license"], "MIT");
    assert_eq!(provenance[0]["curation"]["concluded_license"], "Apache-2.0");
}

#[test]
fn test_wrong_line_count_means_no_match() {
    let test_env = TestProject::new();

    test_env.write_findings(
        r#"{
  "license_findings": [
    {"license": "MIT", "path": "a/path", "start_line": 8, "end_line": 13}
  ]
}"#,
    );

    // line_count 1 does not equal the finding's span of 6 lines
    test_env.write_curations(
        r#"
[[curations]]
path = "**/path"
line_count = 1
detected_license = "MIT"
concluded_license = "Apache-2.0"
reason = "incorrect-detection"
"#,
    );

    let output = test_env.run(&["apply", "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["pass_through"], 1);
    assert_eq!(report["summary"]["curated"], 0);
}

#[test]
fn test_malformed_findings_are_rejected() {
    let test_env = TestProject::new();

    // start_line after end_line violates the location invariant
    test_env.write_findings(
        r#"{
  "license_findings": [
    {"license": "MIT", "path": "a/path", "start_line": 13, "end_line": 8}
  ]
}"#,
    );

    let output = test_env.run(&["apply"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid finding") || stderr.contains("validation"));
}
