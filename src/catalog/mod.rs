//! Static catalog of checkable rules and their severity/quality metadata.
//!
//! The catalog is pure data: it is defined once at startup and published in
//! the report even for rules that produced zero issues, so downstream tooling
//! can show "0 violations" instead of "rule unknown". Checks reference rules
//! exclusively through the id constants below, which keeps every emitted
//! issue tied to a catalog entry.

use indexmap::IndexMap;
use serde::Serialize;

pub const PROJECT_NAME_FORMAT: &str = "project-name-format";
pub const MAIN_APP_NAME: &str = "main-app-name";
pub const DATAWEAVE_MODULES_CAMEL_CASE: &str = "dataweave-modules-CamelCase";
pub const DATAWEAVE_KEBAB_CASE: &str = "dataweave-kebab-case";
pub const XML_KEBAB_CASE: &str = "xml-kebab-case";
pub const YAML_KEBAB_CASE: &str = "yaml-kebab-case";
pub const JSON_EXAMPLE_FORMAT: &str = "json-example-format";
pub const MAIN_RAML_NAME: &str = "main-raml-name";
pub const RESOURCE_LOCATION: &str = "resource-location";
pub const MISSING_REQUIRED_FILE: &str = "missing-required-file";
pub const MISSING_REQUIRED_FOLDER: &str = "missing-required-folder";

/// Engine identifier published with every rule.
pub const ENGINE_ID: &str = "layout-guard";

/// Rule severity, in the dashboard's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleSeverity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl RuleSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Blocker => "BLOCKER",
        }
    }
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a single software-quality impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactSeverity {
    Low,
    Medium,
    High,
}

/// Software quality a rule impacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SoftwareQuality {
    Maintainability,
    Reliability,
    Security,
}

/// Clean-code attribute (consistency group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CleanCodeAttribute {
    Formatted,
    Conventional,
    Identifiable,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    CodeSmell,
    Bug,
    Vulnerability,
}

/// One quality impact of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub software_quality: SoftwareQuality,
    pub severity: ImpactSeverity,
}

/// An immutable rule definition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub engine_id: &'static str,
    pub clean_code_attribute: CleanCodeAttribute,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub severity: RuleSeverity,
    pub impacts: Vec<Impact>,
}

impl Rule {
    fn naming(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            engine_id: ENGINE_ID,
            clean_code_attribute: CleanCodeAttribute::Identifiable,
            rule_type: RuleType::CodeSmell,
            severity: RuleSeverity::Minor,
            impacts: vec![Impact {
                software_quality: SoftwareQuality::Maintainability,
                severity: ImpactSeverity::Low,
            }],
        }
    }

    fn layout(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            engine_id: ENGINE_ID,
            clean_code_attribute: CleanCodeAttribute::Identifiable,
            rule_type: RuleType::CodeSmell,
            severity: RuleSeverity::Major,
            impacts: vec![Impact {
                software_quality: SoftwareQuality::Reliability,
                severity: ImpactSeverity::High,
            }],
        }
    }

    fn identity(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            engine_id: ENGINE_ID,
            clean_code_attribute: CleanCodeAttribute::Identifiable,
            rule_type: RuleType::CodeSmell,
            severity: RuleSeverity::Major,
            impacts: vec![Impact {
                software_quality: SoftwareQuality::Maintainability,
                severity: ImpactSeverity::Medium,
            }],
        }
    }
}

fn definitions() -> Vec<Rule> {
    vec![
        Rule::identity(
            PROJECT_NAME_FORMAT,
            "Project name format",
            "Project name must follow the kebab-case naming convention",
        ),
        Rule::identity(
            MAIN_APP_NAME,
            "Main application XML name match",
            "Main .xml file in src/main/mule must be named after the project folder",
        ),
        Rule::naming(
            DATAWEAVE_MODULES_CAMEL_CASE,
            "DataWeave modules CamelCase",
            "DataWeave files in the modules directory must be in CamelCase",
        ),
        Rule::naming(
            DATAWEAVE_KEBAB_CASE,
            "DataWeave files kebab-case",
            "DataWeave files must be in kebab-case",
        ),
        Rule::naming(
            XML_KEBAB_CASE,
            "XML files kebab-case",
            "XML files must be in kebab-case",
        ),
        Rule::naming(
            YAML_KEBAB_CASE,
            "YAML files kebab-case",
            "YAML files must be in kebab-case",
        ),
        Rule::naming(
            JSON_EXAMPLE_FORMAT,
            "JSON example format",
            "Example JSON files must follow the naming convention",
        ),
        Rule::identity(
            MAIN_RAML_NAME,
            "Main RAML name match",
            "Main RAML file must have the same name as the project",
        ),
        Rule::layout(
            RESOURCE_LOCATION,
            "Resource files location",
            "Ensure the 'src/main/resources' directory exists for DataWeave, YAML, JSON, and RAML files",
        ),
        Rule::layout(
            MISSING_REQUIRED_FILE,
            "Missing required files",
            "Ensure required files exist",
        ),
        Rule::layout(
            MISSING_REQUIRED_FOLDER,
            "Missing required folder",
            "Ensure required folders exist",
        ),
    ]
}

/// Returns the full rule catalog, ordered and de-duplicated by id.
///
/// The first definition wins on a duplicate id, so check code can rely on
/// one entry per id regardless of how the definition table evolves.
#[must_use]
pub fn catalog() -> Vec<Rule> {
    let mut by_id: IndexMap<&'static str, Rule> = IndexMap::new();
    for rule in definitions() {
        by_id.entry(rule.id).or_insert(rule);
    }
    by_id.into_values().collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
