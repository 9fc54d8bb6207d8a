use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::CheckKind;

/// Root configuration, loaded from `.layout-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Which checks run [checks].
    #[serde(default)]
    pub checks: ChecksConfig,

    /// Required files/folders and tree-layout options [structure].
    #[serde(default)]
    pub structure: StructureConfig,

    /// Naming patterns per file class [naming].
    #[serde(default)]
    pub naming: NamingConfig,

    /// Report artifact options [report].
    #[serde(default)]
    pub report: ReportConfig,
}

/// Enabled-checks configuration [checks].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecksConfig {
    /// Checks to run, in configuration order. Execution order is fixed
    /// regardless (see [`CheckKind::ALL`]); this only selects the subset.
    #[serde(default = "CheckKind::default_enabled")]
    pub enabled: Vec<CheckKind>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            enabled: CheckKind::default_enabled(),
        }
    }
}

/// Tree-layout requirements [structure].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureConfig {
    /// Basenames that must exist somewhere under the project root.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Root-relative directories that must exist at their exact path.
    #[serde(default = "default_required_folders")]
    pub required_folders: Vec<String>,

    /// Root-relative prefix of the reusable-modules resource directory.
    /// DataWeave files under it follow the CamelCase rule instead of kebab-case.
    #[serde(default = "default_modules_prefix")]
    pub modules_prefix: String,

    /// Root-relative file that project-scoped issues (project name, missing
    /// files/folders) are anchored to in the report.
    #[serde(default = "default_anchor_file")]
    pub anchor_file: String,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_files: default_required_files(),
            required_folders: default_required_folders(),
            modules_prefix: default_modules_prefix(),
            anchor_file: default_anchor_file(),
        }
    }
}

/// Naming patterns per file class [naming].
///
/// Patterns are matched against the full file name (or project name),
/// case-sensitively; a match must cover the whole string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamingConfig {
    #[serde(default = "default_project_pattern")]
    pub project: String,

    #[serde(default = "default_dataweave_pattern")]
    pub dataweave: String,

    #[serde(default = "default_dataweave_module_pattern")]
    pub dataweave_module: String,

    #[serde(default = "default_xml_pattern")]
    pub xml: String,

    #[serde(default = "default_yaml_pattern")]
    pub yaml: String,

    #[serde(default = "default_json_example_pattern")]
    pub json_example: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            project: default_project_pattern(),
            dataweave: default_dataweave_pattern(),
            dataweave_module: default_dataweave_module_pattern(),
            xml: default_xml_pattern(),
            yaml: default_yaml_pattern(),
            json_example: default_json_example_pattern(),
        }
    }
}

/// Report artifact options [report].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Destination of the JSON report, resolved against the project root
    /// when relative.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

fn default_required_files() -> Vec<String> {
    [
        "pom.xml",
        "README.md",
        "global.xml",
        "munit-global.xml",
        "health-check.xml",
    ]
    .map(String::from)
    .to_vec()
}

fn default_required_folders() -> Vec<String> {
    ["src/main/mule", "src/main/resources", "src/test"]
        .map(String::from)
        .to_vec()
}

fn default_modules_prefix() -> String {
    "src/main/resources/modules".to_string()
}

fn default_anchor_file() -> String {
    "README.md".to_string()
}

fn default_project_pattern() -> String {
    r"^[a-z0-9]+(-[a-z0-9]+){2,}$".to_string()
}

fn default_dataweave_pattern() -> String {
    r"^[a-z0-9]+(-[a-z0-9]+)*\.dwl$".to_string()
}

fn default_dataweave_module_pattern() -> String {
    r"^[A-Z][A-Za-z0-9]+\.dwl$".to_string()
}

fn default_xml_pattern() -> String {
    r"^[a-z0-9]+(-[a-z0-9]+)*\.xml$".to_string()
}

fn default_yaml_pattern() -> String {
    r"^[a-z0-9]+(-[a-z0-9]+)*\.(yaml|yml)$".to_string()
}

fn default_json_example_pattern() -> String {
    r"^(get|post|put|delete|patch)-[a-z0-9-]+-(request|response)-example\.json$".to_string()
}

fn default_report_path() -> PathBuf {
    PathBuf::from("layout-report.json")
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
