//! Structural checker for project-tree layout and naming conventions.
//!
//! [`StructureChecker::run`] scans the tree once and evaluates every enabled
//! check against the result. Checks are independent: each returns its own
//! issue sequence, and the checker concatenates them in the fixed
//! [`CheckKind::ALL`] order, so no check's outcome ever depends on another's.

mod checks;
mod issue;
mod patterns;

pub use issue::{Issue, PrimaryLocation, TextRange};
pub use patterns::{FileClass, NamingPatterns};

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::report::Report;
use crate::scanner::{DirectoryScanner, FileScanner};

/// The independent checks the checker can run.
///
/// Variant order in [`CheckKind::ALL`] is the execution order and therefore
/// the issue order in the report; it is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Project directory name follows the configured kebab-case pattern.
    ProjectName,
    /// Every configured basename exists somewhere under the root.
    RequiredFiles,
    /// Every configured directory exists at its exact path.
    RequiredFolders,
    /// `src/main/mule/<project>.xml` exists.
    MainAppName,
    /// `<project>.raml` exists somewhere under the root.
    MainRamlName,
    /// `src/main/resources` exists.
    ResourceLocation,
    /// `.dwl` files are CamelCase under the modules prefix, kebab-case elsewhere.
    DataweaveNaming,
    /// `.xml` files are kebab-case.
    XmlNaming,
    /// `.yaml`/`.yml` files are kebab-case and paired with a `-secure` sibling.
    YamlNaming,
    /// `.json` files containing "example" follow the example naming convention.
    JsonExampleNaming,
}

impl CheckKind {
    /// All checks, in execution order.
    pub const ALL: [Self; 10] = [
        Self::ProjectName,
        Self::RequiredFiles,
        Self::RequiredFolders,
        Self::MainAppName,
        Self::MainRamlName,
        Self::ResourceLocation,
        Self::DataweaveNaming,
        Self::XmlNaming,
        Self::YamlNaming,
        Self::JsonExampleNaming,
    ];

    /// Checks enabled when the configuration does not say otherwise.
    ///
    /// The main-app, main-raml and resource-location checks are opt-in:
    /// API specifications are typically imported from an exchange rather
    /// than kept in the tree, so those layouts vary per site.
    #[must_use]
    pub fn default_enabled() -> Vec<Self> {
        vec![
            Self::ProjectName,
            Self::RequiredFiles,
            Self::RequiredFolders,
            Self::DataweaveNaming,
            Self::XmlNaming,
            Self::YamlNaming,
            Self::JsonExampleNaming,
        ]
    }
}

/// Evaluates the enabled checks against a project tree.
pub struct StructureChecker {
    config: Config,
    patterns: NamingPatterns,
}

impl StructureChecker {
    /// Create a checker from configuration.
    ///
    /// # Errors
    /// Returns an error if any naming pattern fails to compile.
    pub fn new(config: Config) -> Result<Self> {
        let patterns = NamingPatterns::compile(&config.naming)?;
        Ok(Self { config, patterns })
    }

    /// Run every enabled check and assemble the report.
    ///
    /// # Errors
    /// Returns an error if the project tree cannot be scanned.
    pub fn run(&self, ctx: &ProjectContext) -> Result<Report> {
        let files = DirectoryScanner.scan(&ctx.root)?;

        let issues = CheckKind::ALL
            .into_iter()
            .filter(|kind| self.config.checks.enabled.contains(kind))
            .flat_map(|kind| self.run_check(kind, ctx, &files))
            .collect();

        Ok(Report::build(catalog::catalog(), issues))
    }

    fn run_check(&self, kind: CheckKind, ctx: &ProjectContext, files: &[PathBuf]) -> Vec<Issue> {
        let structure = &self.config.structure;
        match kind {
            CheckKind::ProjectName => checks::project_name(ctx, structure, &self.patterns),
            CheckKind::RequiredFiles => checks::required_files(structure, files),
            CheckKind::RequiredFolders => checks::required_folders(ctx, structure),
            CheckKind::MainAppName => checks::main_app_name(ctx, structure),
            CheckKind::MainRamlName => checks::main_raml_name(ctx, structure, files),
            CheckKind::ResourceLocation => checks::resource_location(ctx, structure),
            CheckKind::DataweaveNaming => {
                checks::dataweave_naming(ctx, structure, &self.patterns, files)
            }
            CheckKind::XmlNaming => checks::xml_naming(ctx, &self.patterns, files),
            CheckKind::YamlNaming => checks::yaml_naming(ctx, &self.patterns, files),
            CheckKind::JsonExampleNaming => {
                checks::json_example_naming(ctx, &self.patterns, files)
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
