use serde::{Deserialize, Serialize};

/// One detected violation of a naming/structure rule.
///
/// Issues are created by checks when a violation is detected and never
/// mutated afterwards. `rule_id` always references a catalog entry; checks
/// construct issues exclusively from the id constants in [`crate::catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub rule_id: String,
    pub primary_location: PrimaryLocation,
}

/// Where an issue was detected. Field names and nesting are part of the
/// report contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    pub message: String,
    pub file_path: String,
    pub text_range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: u32,
    pub end_line: u32,
}

impl Issue {
    /// Create an issue pinned to a single line of `file_path`.
    #[must_use]
    pub fn new(
        rule_id: &'static str,
        file_path: impl Into<String>,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            primary_location: PrimaryLocation {
                message: message.into(),
                file_path: file_path.into(),
                text_range: TextRange {
                    start_line: line,
                    end_line: line,
                },
            },
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
