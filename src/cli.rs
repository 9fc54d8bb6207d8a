use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::CheckKind;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "layout-guard")]
#[command(author, version, about = "Project layout guard - enforce tree structure and naming conventions")]
#[command(long_about = "A tool to check a project tree against layout and naming rules\n\
    and export a SonarQube-compatible issue report.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Layout issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a project tree against the layout rules
    Check(CheckArgs),

    /// Print the rule catalog
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the JSON report to this path (overrides config)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not persist the JSON report
    #[arg(long)]
    pub no_report: bool,

    /// Run only these checks (repeatable, overrides config)
    #[arg(long, value_enum)]
    pub enable: Vec<CheckKind>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write console output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report issues but exit with code 0
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".layout-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax
    Validate {
        /// Path to configuration file (default: .layout-guard.toml)
        #[arg(short, long, default_value = ".layout-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: toml, json]
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
