use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::catalog::Rule;
use crate::checker::Issue;
use crate::error::Result;

/// The single output artifact: the full rule catalog followed by every
/// detected issue, in detection order.
///
/// Field names and nesting are a compatibility contract with the dashboard
/// importer; `rules` always serializes before `issues`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub rules: Vec<Rule>,
    pub issues: Vec<Issue>,
}

impl Report {
    #[must_use]
    pub const fn build(rules: Vec<Rule>, issues: Vec<Issue>) -> Self {
        Self { rules, issues }
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Serialize the report as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Persist the report to `path`, all-or-nothing.
    ///
    /// The JSON is fully serialized in memory, written to a sibling temp
    /// file, and renamed into place, so a failure never leaves a partial
    /// report behind.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
