use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Emits the report artifact itself: `--format json` on the console shows
/// exactly what the persisted report contains.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        report.to_json()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
