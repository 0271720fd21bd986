//! Variate CLI - Command Line Sampling of Distribution Trees
//!
//! Loads a distribution tree described in TOML and samples it.
//!
//! # Commands
//!
//! - `variate sample --tree <file>` - Print samples, one per line
//! - `variate histogram --tree <file>` - Print an equal-width histogram
//! - `variate check --tree <file>` - Validate a tree and print its shape
//!
//! # Configuration
//!
//! `--config` (default `variate.toml`) may set `max_retries`, `seed`,
//! `log_level` and `default_samples`. `VARIATE_MAX_RETRIES`, `VARIATE_SEED`
//! and `VARIATE_LOG_LEVEL` override the file. `RUST_LOG` overrides the log
//! level.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::CliConfig;

/// Composable random-variate sampler
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "variate.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print samples drawn from a tree
    Sample {
        /// Path to the tree description (TOML)
        #[arg(short, long)]
        tree: String,

        /// Number of samples
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a histogram of samples drawn from a tree
    Histogram {
        /// Path to the tree description (TOML)
        #[arg(short, long)]
        tree: String,

        /// Number of samples
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Number of equal-width buckets
        #[arg(short, long, default_value = "20")]
        buckets: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate a tree description
    Check {
        /// Path to the tree description (TOML)
        #[arg(short, long)]
        tree: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    // Initialise tracing
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sample { tree, count, seed } => commands::sample::run(&tree, count, seed, &config),
        Commands::Histogram {
            tree,
            count,
            buckets,
            seed,
        } => commands::histogram::run(&tree, count, buckets, seed, &config),
        Commands::Check { tree } => commands::check::run(&tree, &config),
    }
}
