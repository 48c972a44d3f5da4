//! fsd-lint CLI tool.
//!
//! Usage:
//! ```bash
//! fsd-lint check [OPTIONS] [PATH]
//! fsd-lint list-rules
//! fsd-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Feature-Sliced Design architecture linter for JavaScript and TypeScript
#[derive(Parser)]
#[command(name = "fsd-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FSD_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules, by name or code (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Rewrite fixable imports in place
        #[arg(long)]
        fix: bool,

        /// Rule preset: "recommended" or "minimal"
        #[arg(long, default_value = "recommended")]
        preset: String,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            fix,
            preset,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                rules,
                exclude,
                fix,
                preset,
            };
            commands::check::run(&path, &options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
