use super::helpers::{TestProject, FOUR_FINDINGS, THREE_CURATIONS};

#[test]
fn test_apply_with_curations() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);
    test_env.write_curations(THREE_CURATIONS);

    let output = test_env.run(&["apply", "--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Apache-2.0"));
    assert!(stdout.contains("BSD-3-Clause"));
    // The removed finding keeps its provenance in the report
    assert!(stdout.contains("third/path"));
}

#[test]
fn test_apply_json_summary() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);
    test_env.write_curations(THREE_CURATIONS);

    let output = test_env.run(&["apply", "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("apply should emit valid JSON");
    assert_eq!(report["summary"]["total_findings"], 4);
    assert_eq!(report["summary"]["curated"], 2);
    assert_eq!(report["summary"]["removed"], 1);
    assert_eq!(report["summary"]["pass_through"], 1);
    assert_eq!(report["scanner"], "test-scanner 1.0");
    assert_eq!(report["results"].as_array().unwrap().len(), 4);
}

#[test]
fn test_apply_table_output() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);
    test_env.write_curations(THREE_CURATIONS);

    let output = test_env.run(&["apply", "--format", "table"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Curation Summary"));
    assert!(stdout.contains("(removed)"));
    // Pass-through hidden unless verbose
    assert!(!stdout.contains("fourth/path"));

    let verbose = test_env.run(&["apply", "--format", "table", "--verbose"]);
    assert!(String::from_utf8_lossy(&verbose.stdout).contains("fourth/path"));
}

#[test]
fn test_apply_without_curations_file_passes_through() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);

    let output = test_env.run(&["apply", "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["pass_through"], 4);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No curations file"));
}

#[test]
fn test_fail_on_unused_exit_code() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);
    test_env.write_curations(
        r#"
[[curations]]
path = "no/such/file"
concluded_license = "Apache-2.0"
reason = "incorrect-detection"
"#,
    );

    let ok = test_env.run(&["apply", "--quiet"]);
    assert!(ok.status.success());

    let failing = test_env.run(&["apply", "--quiet", "--fail-on-unused"]);
    assert!(!failing.status.success());
    assert!(String::from_utf8_lossy(&failing.stderr).contains("matched no finding"));
}

#[test]
fn test_init_and_validate() {
    let test_env = TestProject::new();

    let init_output = test_env.run(&["init"]);
    assert!(init_output.status.success());

    let validate_output = test_env.run(&["validate"]);
    assert!(validate_output.status.success());
    assert!(String::from_utf8_lossy(&validate_output.stdout).contains("valid"));

    // A second init must refuse to clobber the file
    let second_init = test_env.run(&["init"]);
    assert!(!second_init.status.success());
}

#[test]
fn test_validate_rejects_bad_reason() {
    let test_env = TestProject::new();

    test_env.write_curations(
        r#"
[[curations]]
concluded_license = "MIT"
reason = "gut-feeling"
"#,
    );

    let output = test_env.run(&["validate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("validation failed"));
}

#[test]
fn test_record_appends_rule() {
    let test_env = TestProject::new();

    test_env.run(&["init"]);
    let record_output = test_env.run(&[
        "record",
        "--path",
        "vendor/**",
        "--detected",
        "MIT",
        "--concluded",
        "Apache-2.0",
        "--reason",
        "incorrect-detection",
        "--comment",
        "Relicensed upstream",
    ]);
    assert!(record_output.status.success());

    let content = test_env.read_curations();
    assert!(content.contains("vendor/**"));
    assert!(content.contains("Relicensed upstream"));
    // Starter file comments survive the toml_edit append
    assert!(content.contains("Curations override license findings"));

    // The recorded rule now curates matching findings
    test_env.write_findings(
        r#"{"license_findings": [
            {"license": "MIT", "path": "vendor/lib.c", "start_line": 1, "end_line": 9}
        ]}"#,
    );
    let apply_output = test_env.run(&["apply", "--format", "json"]);
    let report: serde_json::Value = serde_json::from_slice(&apply_output.stdout).unwrap();
    assert_eq!(report["summary"]["curated"], 1);
}

#[test]
fn test_config_file_sets_defaults() {
    let test_env = TestProject::new();

    test_env.write_findings(FOUR_FINDINGS);
    test_env.write_curations(THREE_CURATIONS);
    std::fs::write(
        test_env.path().join("license-curator.toml"),
        "[tool.license-curator]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = test_env.run(&["apply"]);
    assert!(output.status.success());
    // JSON by config default, no --format needed
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}
