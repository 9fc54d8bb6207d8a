use tempfile::TempDir;

use super::*;
use crate::catalog::{self, catalog};

fn sample_report() -> Report {
    let issues = vec![Issue::new(
        catalog::MISSING_REQUIRED_FILE,
        "README.md",
        1,
        "Required file 'pom.xml' not found, please check development standards.",
    )];
    Report::build(catalog(), issues)
}

#[test]
fn rules_serialize_before_issues() {
    let json = sample_report().to_json().unwrap();
    let rules_pos = json.find("\"rules\"").unwrap();
    let issues_pos = json.find("\"issues\"").unwrap();
    assert!(rules_pos < issues_pos);
}

#[test]
fn json_nesting_matches_the_import_contract() {
    let report = sample_report();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["rules"].as_array().unwrap().len(), catalog().len());
    let issue = &value["issues"][0];
    assert_eq!(issue["ruleId"], "missing-required-file");
    assert_eq!(issue["primaryLocation"]["filePath"], "README.md");
    assert_eq!(issue["primaryLocation"]["textRange"]["startLine"], 1);
    assert_eq!(issue["primaryLocation"]["textRange"]["endLine"], 1);
}

#[test]
fn has_issues_reflects_content() {
    assert!(sample_report().has_issues());
    assert!(!Report::build(catalog(), Vec::new()).has_issues());
}

#[test]
fn save_writes_the_exact_json() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("layout-report.json");

    let report = sample_report();
    report.save(&dest).unwrap();

    let on_disk = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(on_disk, report.to_json().unwrap());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("reports/nested/layout-report.json");

    sample_report().save(&dest).unwrap();
    assert!(dest.is_file());
}

#[test]
fn save_overwrites_previous_report_atomically() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("layout-report.json");
    std::fs::write(&dest, "stale").unwrap();

    sample_report().save(&dest).unwrap();

    let on_disk = std::fs::read_to_string(&dest).unwrap();
    assert!(on_disk.starts_with('{'));
    // No temp file left behind
    assert!(!temp_dir.path().join("layout-report.json.tmp").exists());
}

#[test]
fn save_fails_when_destination_is_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");
    std::fs::create_dir(&dest).unwrap();

    assert!(sample_report().save(&dest).is_err());
}
