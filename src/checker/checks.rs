//! The independent layout checks.
//!
//! Each check is a pure function of the project context, the configuration,
//! and the scanned file list, and returns its own issue sequence; the checker
//! concatenates them. Checks that have no concrete file to point at (project
//! name, missing files/folders) anchor their issue to the configured anchor
//! file at line 1.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::catalog;
use crate::config::StructureConfig;
use crate::context::ProjectContext;

use super::issue::Issue;
use super::patterns::{FileClass, NamingPatterns};

/// Directory expected to hold DataWeave, YAML, JSON and RAML resources.
const RESOURCES_DIR: &str = "src/main/resources";

/// Directory expected to hold the main application XML.
const MAIN_APP_DIR: &str = "src/main/mule";

fn anchored(rule_id: &'static str, structure: &StructureConfig, message: String) -> Issue {
    Issue::new(rule_id, structure.anchor_file.clone(), 1, message)
}

fn utf8_file_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()
}

/// Every configured basename must exist somewhere under the root; location
/// does not matter. One issue per name still missing after the full walk.
pub(crate) fn required_files(structure: &StructureConfig, files: &[PathBuf]) -> Vec<Issue> {
    let present: HashSet<&OsStr> = files.iter().filter_map(|p| p.file_name()).collect();
    let required: IndexSet<&str> = structure.required_files.iter().map(String::as_str).collect();

    required
        .iter()
        .filter(|name| !present.contains(OsStr::new(**name)))
        .map(|name| {
            anchored(
                catalog::MISSING_REQUIRED_FILE,
                structure,
                format!("Required file '{name}' not found, please check development standards."),
            )
        })
        .collect()
}

/// Configured folders must exist at their exact root-relative path. Tested
/// with a direct path join, not a walk.
pub(crate) fn required_folders(ctx: &ProjectContext, structure: &StructureConfig) -> Vec<Issue> {
    let required: IndexSet<&str> = structure
        .required_folders
        .iter()
        .map(String::as_str)
        .collect();

    required
        .iter()
        .filter(|folder| !ctx.root.join(folder).is_dir())
        .map(|folder| {
            anchored(
                catalog::MISSING_REQUIRED_FOLDER,
                structure,
                format!("Required folder '{folder}' not found, please check development standards."),
            )
        })
        .collect()
}

/// The project directory name must match the configured kebab-case pattern
/// (at least three hyphen-separated segments by default).
pub(crate) fn project_name(
    ctx: &ProjectContext,
    structure: &StructureConfig,
    patterns: &NamingPatterns,
) -> Vec<Issue> {
    if patterns.matches(FileClass::Project, &ctx.name) {
        return Vec::new();
    }

    vec![anchored(
        catalog::PROJECT_NAME_FORMAT,
        structure,
        format!(
            "Project name '{}' is not the expected kebab-case format",
            ctx.name
        ),
    )]
}

/// `src/main/mule/<project>.xml` must exist.
pub(crate) fn main_app_name(ctx: &ProjectContext, structure: &StructureConfig) -> Vec<Issue> {
    let expected = format!("{}.xml", ctx.name);
    if ctx.root.join(MAIN_APP_DIR).join(&expected).is_file() {
        return Vec::new();
    }

    vec![anchored(
        catalog::MAIN_APP_NAME,
        structure,
        format!("Main application file '{expected}' not found in {MAIN_APP_DIR}"),
    )]
}

/// `<project>.raml` must exist somewhere under the root, same "found
/// anywhere" semantics as the required-files check.
pub(crate) fn main_raml_name(
    ctx: &ProjectContext,
    structure: &StructureConfig,
    files: &[PathBuf],
) -> Vec<Issue> {
    let expected = format!("{}.raml", ctx.name);
    if files
        .iter()
        .any(|f| f.file_name() == Some(OsStr::new(&expected)))
    {
        return Vec::new();
    }

    vec![anchored(
        catalog::MAIN_RAML_NAME,
        structure,
        format!("Main RAML file '{expected}' not found"),
    )]
}

/// `src/main/resources` must exist.
pub(crate) fn resource_location(ctx: &ProjectContext, structure: &StructureConfig) -> Vec<Issue> {
    if ctx.root.join(RESOURCES_DIR).is_dir() {
        return Vec::new();
    }

    vec![anchored(
        catalog::RESOURCE_LOCATION,
        structure,
        format!("Missing '{RESOURCES_DIR}' directory for DataWeave, YAML, JSON, and RAML files"),
    )]
}

/// `.dwl` files under the modules prefix must be CamelCase; all other `.dwl`
/// files must be kebab-case. The branch is selected purely by the containing
/// path, so a file is evaluated against exactly one of the two patterns.
pub(crate) fn dataweave_naming(
    ctx: &ProjectContext,
    structure: &StructureConfig,
    patterns: &NamingPatterns,
    files: &[PathBuf],
) -> Vec<Issue> {
    let modules_prefix = Path::new(&structure.modules_prefix);
    let mut issues = Vec::new();

    for file in files {
        let Some(name) = utf8_file_name(file) else {
            continue;
        };
        if !name.ends_with(".dwl") {
            continue;
        }

        let rel = file.strip_prefix(&ctx.root).unwrap_or(file);
        if rel.starts_with(modules_prefix) {
            if !patterns.matches(FileClass::DataweaveModule, name) {
                issues.push(Issue::new(
                    catalog::DATAWEAVE_MODULES_CAMEL_CASE,
                    ctx.relative(file),
                    1,
                    format!("DataWeave file '{name}' in modules must be in CamelCase"),
                ));
            }
        } else if !patterns.matches(FileClass::Dataweave, name) {
            issues.push(Issue::new(
                catalog::DATAWEAVE_KEBAB_CASE,
                ctx.relative(file),
                1,
                format!("DataWeave file '{name}' must be in kebab-case"),
            ));
        }
    }

    issues
}

/// `.xml` files must be kebab-case.
pub(crate) fn xml_naming(
    ctx: &ProjectContext,
    patterns: &NamingPatterns,
    files: &[PathBuf],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for file in files {
        let Some(name) = utf8_file_name(file) else {
            continue;
        };
        if !name.ends_with(".xml") {
            continue;
        }

        if !patterns.matches(FileClass::Xml, name) {
            issues.push(Issue::new(
                catalog::XML_KEBAB_CASE,
                ctx.relative(file),
                1,
                format!("XML file '{name}' is not in kebab-case"),
            ));
        }
    }

    issues
}

/// `.yaml`/`.yml` files must be kebab-case, and every non-`-secure` file
/// must have a `<stem>-secure.yaml` sibling in the same directory.
///
/// The pairing check fires independently of the format check, so a single
/// file can produce two issues. The pairing issue borrows the
/// `missing-required-file` rule id; see DESIGN.md for the rationale.
pub(crate) fn yaml_naming(
    ctx: &ProjectContext,
    patterns: &NamingPatterns,
    files: &[PathBuf],
) -> Vec<Issue> {
    let file_set: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();
    let mut issues = Vec::new();

    for file in files {
        let Some(name) = utf8_file_name(file) else {
            continue;
        };
        let is_yaml = name.ends_with(".yaml") || name.ends_with(".yml");
        if !is_yaml {
            continue;
        }

        if !patterns.matches(FileClass::Yaml, name) {
            issues.push(Issue::new(
                catalog::YAML_KEBAB_CASE,
                ctx.relative(file),
                1,
                format!("YAML file '{name}' is not in kebab-case"),
            ));
        }

        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
        if stem.ends_with("-secure") {
            continue;
        }

        let secure_name = format!("{stem}-secure.yaml");
        let present = file
            .parent()
            .is_some_and(|dir| file_set.contains(dir.join(&secure_name).as_path()));
        if !present {
            issues.push(Issue::new(
                catalog::MISSING_REQUIRED_FILE,
                ctx.relative(file),
                1,
                format!("Missing '{secure_name}' in the same directory"),
            ));
        }
    }

    issues
}

/// `.json` files whose name contains "example" must follow the
/// method/direction naming convention; other `.json` files are exempt.
pub(crate) fn json_example_naming(
    ctx: &ProjectContext,
    patterns: &NamingPatterns,
    files: &[PathBuf],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for file in files {
        let Some(name) = utf8_file_name(file) else {
            continue;
        };
        if !name.ends_with(".json") || !name.contains("example") {
            continue;
        }

        if !patterns.matches(FileClass::JsonExample, name) {
            issues.push(Issue::new(
                catalog::JSON_EXAMPLE_FORMAT,
                ctx.relative(file),
                1,
                format!("Example JSON file '{name}' does not follow naming convention"),
            ));
        }
    }

    issues
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
