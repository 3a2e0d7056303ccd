//! Tally CLI - formula-row calculator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod session;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Formula-row calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single arithmetic expression and print the result
    Eval {
        /// Expression to evaluate, e.g. "2 + 3 * 4"
        expression: String,
    },

    /// Run an interactive formula-row session
    Run {
        /// JSON file holding the suggestion catalog
        #[arg(short, long)]
        suggestions: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Eval { expression } => {
            let value = tally::evaluate_str(&expression)
                .with_context(|| format!("failed to evaluate '{}'", expression))?;
            println!("{}", value);
            Ok(())
        }
        Commands::Run { suggestions } => session::run(suggestions.as_deref()),
    }
}
