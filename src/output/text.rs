use std::collections::HashMap;
use std::io::Write as IoWrite;

use crate::catalog::RuleSeverity;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self {
            use_colors,
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: RuleSeverity) -> &'static str {
        match severity {
            RuleSeverity::Info | RuleSeverity::Minor => ansi::YELLOW,
            RuleSeverity::Major | RuleSeverity::Critical | RuleSeverity::Blocker => ansi::RED,
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let severities: HashMap<&str, RuleSeverity> = report
            .rules
            .iter()
            .map(|r| (r.id, r.severity))
            .collect();

        let mut output = Vec::new();

        for issue in &report.issues {
            let severity = severities
                .get(issue.rule_id.as_str())
                .copied()
                .unwrap_or(RuleSeverity::Major);
            let tag = self.colorize(severity.as_str(), Self::severity_color(severity));
            let loc = &issue.primary_location;

            writeln!(
                output,
                "\u{2717} {tag} {}: {} ({}:{})",
                issue.rule_id, loc.message, loc.file_path, loc.text_range.start_line
            )
            .ok();
        }

        // Per-rule counts, including clean rules, in verbose mode
        if self.verbose >= 1 {
            if !report.issues.is_empty() {
                writeln!(output).ok();
            }
            for rule in &report.rules {
                let count = report
                    .issues
                    .iter()
                    .filter(|i| i.rule_id == rule.id)
                    .count();
                writeln!(output, "{:>4}  {}", count, rule.id).ok();
            }
        }

        if !report.issues.is_empty() {
            writeln!(output).ok();
        }

        let summary = if report.issues.is_empty() {
            self.colorize("No layout issues found", ansi::GREEN)
        } else {
            format!(
                "Summary: {} issue(s) found, {} rule(s) checked",
                report.issues.len(),
                report.rules.len()
            )
        };
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
