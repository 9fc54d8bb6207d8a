//! End-to-end tests for the check command: exit codes, report artifact,
//! determinism, CLI overrides.

mod common;

use common::{NAMING_ONLY_CONFIG, REQUIRED_FILES_ONLY_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Exit codes and basic behavior
// =============================================================================

#[test]
fn check_passes_on_clean_project() {
    let fixture = TestFixture::new();
    let project = fixture.create_clean_project("acme-orders-api");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", project.as_str(), "--no-report", "--no-config", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_fails_when_required_file_is_missing() {
    let fixture = TestFixture::new();
    fixture.create_config(REQUIRED_FILES_ONLY_CONFIG);
    fixture.create_dir("acme-orders-api/src");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "acme-orders-api", "--no-report", "--quiet"])
        .assert()
        .code(1);
}

#[test]
fn check_warn_only_mode_always_succeeds() {
    let fixture = TestFixture::new();
    fixture.create_config(REQUIRED_FILES_ONLY_CONFIG);
    fixture.create_dir("acme-orders-api/src");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "acme-orders-api", "--no-report", "--warn-only", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_reports_issue_details_on_stdout() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("xml-kebab-case"))
        .stdout(predicate::str::contains("MainFlow.xml"));
}

#[test]
fn check_quiet_suppresses_stdout() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_fails_with_config_error_for_missing_root() {
    let fixture = TestFixture::new();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "does-not-exist", "--no-report", "--no-config", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn check_fails_with_config_error_for_bad_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[naming]\nxml = \"[broken\"\n");
    fixture.create_dir("proj");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid naming pattern"));
}

// =============================================================================
// Report artifact
// =============================================================================

#[test]
fn check_writes_report_into_project_root_by_default() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--quiet"])
        .assert()
        .code(1);

    let report_path = fixture.path().join("proj/layout-report.json");
    let content = std::fs::read_to_string(report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["issues"][0]["ruleId"], "xml-kebab-case");
    assert_eq!(
        value["issues"][0]["primaryLocation"]["filePath"],
        "src/main/mule/MainFlow.xml"
    );
    // The catalog is published even for rules with zero violations
    assert!(value["rules"].as_array().unwrap().len() >= 11);
}

#[test]
fn check_report_flag_overrides_destination() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/ok.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--report", "out/custom.json", "--quiet"])
        .assert()
        .success();

    assert!(fixture.path().join("proj/out/custom.json").is_file());
}

#[test]
fn check_no_report_skips_the_artifact() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/ok.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--quiet"])
        .assert()
        .success();

    assert!(!fixture.path().join("proj/layout-report.json").exists());
}

#[test]
fn unwritable_report_destination_is_not_fatal() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/ok.xml", "");
    // Occupy the destination with a directory so the rename must fail
    fixture.create_dir("proj/layout-report.json");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to write report"));
}

#[test]
fn two_runs_produce_identical_report_bytes() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/resources/Config.yaml", "");
    fixture.create_file("proj/src/main/resources/b/Other.yaml", "");

    let report_path = fixture.path().join("proj/layout-report.json");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--quiet"])
        .assert()
        .code(1);
    let first = std::fs::read(&report_path).unwrap();

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--quiet"])
        .assert()
        .code(1);
    let second = std::fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// CLI overrides and output options
// =============================================================================

#[test]
fn enable_flag_overrides_configured_checks() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    // Violates xml naming, but only yaml naming is enabled on the CLI
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--quiet", "--enable", "yaml-naming"])
        .assert()
        .success();
}

#[test]
fn json_format_emits_the_report_on_stdout() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    let output = layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["issues"][0]["ruleId"], "xml-kebab-case");
}

#[test]
fn output_flag_writes_console_output_to_file() {
    let fixture = TestFixture::new();
    fixture.create_config(NAMING_ONLY_CONFIG);
    fixture.create_file("proj/src/main/mule/MainFlow.xml", "");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--output", "console.txt"])
        .assert()
        .code(1);

    let content = std::fs::read_to_string(fixture.path().join("console.txt")).unwrap();
    assert!(content.contains("xml-kebab-case"));
}

#[test]
fn no_config_flag_uses_built_in_defaults() {
    let fixture = TestFixture::new();
    // Local config disables everything; --no-config must ignore it
    fixture.create_config("[checks]\nenabled = []\n");
    fixture.create_dir("proj/src");

    layout_guard!()
        .current_dir(fixture.path())
        .args(["check", "proj", "--no-report", "--no-config", "--quiet"])
        .assert()
        .code(1);
}
