use super::*;
use crate::catalog::{self, catalog};
use crate::checker::Issue;
use crate::report::Report;

#[test]
fn json_output_is_the_report_artifact() {
    let issues = vec![Issue::new(
        catalog::JSON_EXAMPLE_FORMAT,
        "orders-example.json",
        1,
        "Example JSON file 'orders-example.json' does not follow naming convention",
    )];
    let report = Report::build(catalog(), issues);

    let output = JsonFormatter.format(&report).unwrap();
    assert_eq!(output, report.to_json().unwrap());
}

#[test]
fn json_output_parses_back() {
    let report = Report::build(catalog(), Vec::new());
    let output = JsonFormatter.format(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["issues"].as_array().unwrap().is_empty());
    assert_eq!(value["rules"].as_array().unwrap().len(), catalog().len());
}
