use regex::Regex;

use crate::config::NamingConfig;
use crate::error::{LayoutGuardError, Result};

/// File classes with a configurable naming pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClass {
    Project,
    Dataweave,
    DataweaveModule,
    Xml,
    Yaml,
    JsonExample,
}

/// The naming patterns, compiled once per run.
///
/// Every pattern is compiled fully anchored, so a match must cover the whole
/// name: substring hits never count, and matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct NamingPatterns {
    project: Regex,
    dataweave: Regex,
    dataweave_module: Regex,
    xml: Regex,
    yaml: Regex,
    json_example: Regex,
}

impl NamingPatterns {
    /// Compile the configured patterns.
    ///
    /// # Errors
    /// Returns [`LayoutGuardError::InvalidPattern`] for the first pattern
    /// that fails to compile.
    pub fn compile(config: &NamingConfig) -> Result<Self> {
        Ok(Self {
            project: compile_anchored(&config.project)?,
            dataweave: compile_anchored(&config.dataweave)?,
            dataweave_module: compile_anchored(&config.dataweave_module)?,
            xml: compile_anchored(&config.xml)?,
            yaml: compile_anchored(&config.yaml)?,
            json_example: compile_anchored(&config.json_example)?,
        })
    }

    const fn pattern(&self, class: FileClass) -> &Regex {
        match class {
            FileClass::Project => &self.project,
            FileClass::Dataweave => &self.dataweave,
            FileClass::DataweaveModule => &self.dataweave_module,
            FileClass::Xml => &self.xml,
            FileClass::Yaml => &self.yaml,
            FileClass::JsonExample => &self.json_example,
        }
    }

    /// Whether `name` fully matches the pattern for `class`.
    #[must_use]
    pub fn matches(&self, class: FileClass, name: &str) -> bool {
        self.pattern(class).is_match(name)
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    // Redundant anchors in the user's pattern are harmless.
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| LayoutGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
