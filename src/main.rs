//! # pom-tree
//!
//! A CLI that loads a multi-module Maven project, classifies every module and
//! reports which ones need to produce a build artifact.
//!
//! ## Usage
//!
//! ```bash
//! # Report on the project in the current directory
//! pom-tree
//!
//! # Only list buildable modules, seeding a version for modules that omit one
//! pom-tree ~/src/shop --buildable-only --default-version 1.0.0-SNAPSHOT
//!
//! # Machine-readable output
//! pom-tree ~/src/shop --json
//! ```

mod cli;

use std::{process::exit, time::Duration};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pom_tree::{
    TreeBuilder,
    config::{BuildOptions, FileConfig},
    descriptor::PomDecoder,
    fs::RealFileSystem,
    logging::init_logging,
    output::Report,
    project::ProjectNode,
};
use tracing::info;

/// Entry point for the pom-tree application.
///
/// Errors from [`inner_main`] are printed to stderr before exiting with a
/// non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, loads the module tree, classifies it and prints the
/// report.
///
/// # Errors
///
/// Returns errors from loading the module tree or from JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();
    init_logging(&args.logging_config(&file_config));

    let build_options = args.build_options(&file_config);
    let report_options = args.report_options(&file_config);

    let mut tree = load_tree(&build_options, report_options.json)?;
    info!(modules = tree.module_count(), "module tree loaded");

    let report = Report::from_tree(&mut tree);

    if report_options.json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_text(report_options.buildable_only));
    }

    Ok(())
}

/// Build the module tree, showing a spinner unless JSON output is requested.
///
/// # Errors
///
/// Returns the descriptor load error, which names the module that failed.
fn load_tree(options: &BuildOptions, quiet: bool) -> Result<ProjectNode> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };
    spinner.set_message(format!(
        "Loading modules from {}...",
        options.root.display()
    ));

    let result = TreeBuilder::new(&RealFileSystem, &PomDecoder)
        .with_descriptor_file(options.descriptor.as_str())
        .build(&options.root, &options.default_version);

    spinner.finish_and_clear();

    Ok(result?)
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# pom-tree configuration
# All values shown are their defaults. Uncomment and change as needed.

# Root module directory (defaults to current directory when not set)
# dir = "."

# Version given to the root module when it declares none
# default_version = ""

# Descriptor filename looked up in every module directory
# descriptor = "pom.xml"

[report]
# Only list modules that need to produce a build artifact
# buildable_only = false

# Print a JSON document instead of the coloured tree
# json = false

[logging]
# Minimum log level: trace, debug, info, warn, error
# level = "warn"

# Emit log lines as JSON
# json = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format the effective settings as `key = value` lines, marking defaults.
fn format_config(config: &FileConfig) -> String {
    let value = |set: Option<String>, default: &str| {
        set.unwrap_or_else(|| format!("{default}  (default)"))
    };
    let quoted = |v: Option<&str>| v.map(|v| format!("\"{v}\""));

    let rows = [
        (
            "dir",
            value(
                config.dir.as_ref().map(|p| format!("\"{}\"", p.display())),
                "\".\"",
            ),
        ),
        (
            "default_version",
            value(quoted(config.default_version.as_deref()), "\"\""),
        ),
        (
            "descriptor",
            value(quoted(config.descriptor.as_deref()), "\"pom.xml\""),
        ),
        (
            "report.buildable_only",
            value(config.report.buildable_only.map(|b| b.to_string()), "false"),
        ),
        (
            "report.json",
            value(config.report.json.map(|b| b.to_string()), "false"),
        ),
        (
            "logging.level",
            value(quoted(config.logging.level.as_deref()), "\"warn\""),
        ),
        (
            "logging.json",
            value(config.logging.json.map(|b| b.to_string()), "false"),
        ),
    ];

    rows.iter()
        .map(|(key, value)| format!("{key:<21} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_as_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.dir.is_none());
        assert!(config.default_version.is_none());
        assert!(config.report.json.is_none());
    }

    #[test]
    fn test_format_config_shows_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("descriptor            = \"pom.xml\"  (default)"));
        assert!(text.contains("report.buildable_only = false  (default)"));
        assert!(text.contains("logging.level         = \"warn\"  (default)"));
    }

    #[test]
    fn test_format_config_shows_file_values() {
        let config: FileConfig = toml::from_str(
            "default_version = \"1.0\"\n[report]\njson = true\n",
        )
        .unwrap();

        let text = format_config(&config);

        assert!(text.contains("default_version       = \"1.0\"\n"));
        assert!(text.contains("report.json           = true\n"));
        assert!(text.contains("dir                   = \".\"  (default)"));
    }
}
