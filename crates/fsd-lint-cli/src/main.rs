//! fsd-lint CLI tool.
//!
//! Usage:
//! ```bash
//! fsd-lint check --file src/pages/Main/ui/Main.tsx --import @/widgets/Header
//! fsd-lint check-edges imports.jsonl
//! fsd-lint list-rules
//! fsd-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Feature-Sliced Design import linter
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
    /// Check the imports of a single file
    Check {
        /// Path of the importing file
        #[arg(long)]
        file: String,

        /// Import specifier (can be specified multiple times)
        #[arg(short, long = "import", required = true)]
        imports: Vec<String>,

        #[command(flatten)]
        options: CheckOptions,
    },

    /// Check import edges read as JSON Lines
    CheckEdges {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        options: CheckOptions,
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

/// Options shared by the checking commands.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckOptions {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only run specific rules (comma-separated names or codes)
    #[arg(long)]
    pub rules: Option<String>,

    /// Import alias, overriding the configured one (e.g. "@")
    #[arg(long)]
    pub alias: Option<String>,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let source = config_resolver::ConfigSource::locate(&cwd, cli.config.as_deref());

    match cli.command {
        Commands::Check {
            file,
            imports,
            options,
        } => commands::check::run(&file, &imports, &options, &source),
        Commands::CheckEdges { input, options } => {
            commands::check_edges::run(&input, &options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(&cwd, force),
    }
}
