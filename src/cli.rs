//! Command-line interface definition and argument parsing.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use pom_tree::config::file::{FileConfig, expand_tilde};
use pom_tree::config::{BuildOptions, ReportOptions};
use pom_tree::descriptor::DESCRIPTOR_FILE;
use pom_tree::logging::{LoggingConfig, parse_level};

/// Command-line arguments controlling what is reported.
#[derive(Parser)]
struct ReportArgs {
    /// Only list modules that need to produce a build artifact
    #[arg(short = 'b', long)]
    buildable_only: bool,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, the coloured tree and progress spinner are suppressed
    /// and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,
}

/// Command-line arguments controlling log output.
#[derive(Parser)]
struct LoggingArgs {
    /// Log every descriptor as it is loaded
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "pom-tree")]
#[command(
    about = "Load a multi-module Maven project and report which modules need to produce a build artifact"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Root module directory (the one holding the top-level pom.xml)
    ///
    /// Defaults to the configured `dir`, or the current directory.
    dir: Option<PathBuf>,

    /// Version given to the root module when it declares none
    ///
    /// Modules without a <version> inherit it from the module that declares
    /// them; this value seeds that chain at the root.
    #[arg(short = 'r', long)]
    default_version: Option<String>,

    /// Descriptor filename looked up in every module directory
    #[arg(long)]
    descriptor: Option<String>,

    /// Report options
    #[command(flatten)]
    report: ReportArgs,

    /// Logging options
    #[command(flatten)]
    logging: LoggingArgs,
}

impl Cli {
    /// Resolve what to load from CLI args, config file, or defaults.
    ///
    /// Priority: CLI argument > config file > default. Tilde expansion is
    /// applied to a directory that comes from the config file.
    #[must_use]
    pub fn build_options(&self, config: &FileConfig) -> BuildOptions {
        let root = self
            .dir
            .clone()
            .or_else(|| config.dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from("."));

        BuildOptions {
            root,
            default_version: self
                .default_version
                .clone()
                .or_else(|| config.default_version.clone())
                .unwrap_or_default(),
            descriptor: self
                .descriptor
                .clone()
                .or_else(|| config.descriptor.clone())
                .unwrap_or_else(|| DESCRIPTOR_FILE.to_string()),
        }
    }

    /// Extract report options from CLI args and config file.
    ///
    /// A CLI flag set to `true` wins, then the config file value, then `false`.
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        ReportOptions {
            buildable_only: self.report.buildable_only
                || config.report.buildable_only.unwrap_or(false),
            json: self.report.json || config.report.json.unwrap_or(false),
        }
    }

    /// Extract logging options from CLI args and config file.
    ///
    /// `--verbose` and `--quiet` override the configured level. An unknown
    /// configured level falls back to the default.
    #[must_use]
    pub fn logging_config(&self, config: &FileConfig) -> LoggingConfig {
        let level = if self.logging.verbose {
            Level::DEBUG
        } else if self.logging.quiet {
            Level::ERROR
        } else {
            config
                .logging
                .level
                .as_deref()
                .and_then(parse_level)
                .unwrap_or(Level::WARN)
        };

        LoggingConfig {
            use_json: config.logging.json.unwrap_or(false),
            ..LoggingConfig::with_level(level)
        }
    }
}
