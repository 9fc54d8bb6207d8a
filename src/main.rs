use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use layout_guard::catalog;
use layout_guard::checker::StructureChecker;
use layout_guard::cli::{
    CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs, RulesArgs,
};
use layout_guard::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use layout_guard::context::ProjectContext;
use layout_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use layout_guard::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> layout_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Build the project context
    let ctx = ProjectContext::new(&args.path)?;

    // 4. Run the checker
    let checker = StructureChecker::new(config.clone())?;
    let report = checker.run(&ctx)?;

    // 5. Persist the report; a write failure is a diagnostic, not a crash
    if !args.no_report {
        let dest = report_destination(args, &config, &ctx);
        match report.save(&dest) {
            Ok(()) => {
                if !cli.quiet {
                    eprintln!("Report written to {}", dest.display());
                }
            }
            Err(e) => {
                eprintln!("Warning: failed to write report to {}: {e}", dest.display());
            }
        }
    }

    // 6. Format console output
    let color_mode = color_choice_to_mode(cli.color);
    let output = match args.format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, cli.verbose).format(&report),
        OutputFormat::Json => JsonFormatter.format(&report),
    }?;

    // 7. Write console output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    if args.warn_only || !report.has_issues() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ISSUES_FOUND)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> layout_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if !args.enable.is_empty() {
        config.checks.enabled = args.enable.clone();
    }

    if let Some(report) = &args.report {
        config.report.path.clone_from(report);
    }
}

/// Relative report destinations resolve against the project root, so the
/// artifact lands next to the tree it describes regardless of the cwd.
fn report_destination(args: &CheckArgs, config: &Config, ctx: &ProjectContext) -> PathBuf {
    let dest = args.report.as_ref().unwrap_or(&config.report.path);
    if dest.is_absolute() {
        dest.clone()
    } else {
        ctx.root.join(dest)
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> layout_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args) {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_rules_impl(args: &RulesArgs) -> layout_guard::Result<String> {
    let rules = catalog::catalog();

    match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rules)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            use std::fmt::Write;

            let mut output = String::new();
            for rule in &rules {
                let _ = writeln!(output, "{:<28} {:<8} {}", rule.id, rule.severity, rule.name);
                let _ = writeln!(output, "    {}", rule.description);
            }
            Ok(output)
        }
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> layout_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(layout_guard::LayoutGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r##"# layout-guard configuration file

[checks]
# Checks to run. Execution order is fixed; this selects the subset.
# Also available: "main-app-name", "main-raml-name", "resource-location"
enabled = [
    "project-name",
    "required-files",
    "required-folders",
    "dataweave-naming",
    "xml-naming",
    "yaml-naming",
    "json-example-naming",
]

[structure]
# Basenames that must exist somewhere under the project root
required_files = [
    "pom.xml",
    "README.md",
    "global.xml",
    "munit-global.xml",
    "health-check.xml",
]

# Directories that must exist at their exact root-relative path
required_folders = ["src/main/mule", "src/main/resources", "src/test"]

# DataWeave files under this prefix follow the CamelCase rule
modules_prefix = "src/main/resources/modules"

# File that project-scoped issues are anchored to in the report
anchor_file = "README.md"

[naming]
# Patterns match the whole file name, case-sensitively
project = '^[a-z0-9]+(-[a-z0-9]+){2,}$'
dataweave = '^[a-z0-9]+(-[a-z0-9]+)*\.dwl$'
dataweave_module = '^[A-Z][A-Za-z0-9]+\.dwl$'
xml = '^[a-z0-9]+(-[a-z0-9]+)*\.xml$'
yaml = '^[a-z0-9]+(-[a-z0-9]+)*\.(yaml|yml)$'
json_example = '^(get|post|put|delete|patch)-[a-z0-9-]+-(request|response)-example\.json$'

[report]
# Destination of the JSON report, resolved against the project root
path = "layout-report.json"
"##
}

fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> layout_guard::Result<()> {
    if !config_path.exists() {
        return Err(layout_guard::LayoutGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate_config_semantics(&config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> layout_guard::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let mut json = serde_json::to_string_pretty(&config)?;
            json.push('\n');
            Ok(json)
        }
        _ => toml::to_string_pretty(&config)
            .map_err(|e| layout_guard::LayoutGuardError::Config(e.to_string())),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
