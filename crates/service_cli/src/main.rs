//! Replan CLI - Command Line Operations for Checkpoint Scheduling
//!
//! This is the operational entry point for the replan scheduling library.
//!
//! # Commands
//!
//! - `replan plan --data <file> --budget <units>` - Compute a checkpoint
//!   schedule for a chain under a memory budget
//! - `replan inspect --data <file>` - Summarise a chain without solving
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! core and optimiser layers behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Replan checkpoint scheduling CLI
#[derive(Parser)]
#[command(name = "replan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a checkpoint schedule under a memory budget
    Plan {
        /// Path to the chain description file (JSON)
        #[arg(short, long)]
        data: String,

        /// Memory budget, in the chain's size units
        #[arg(short, long)]
        budget: u64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Summarise a chain without solving
    Inspect {
        /// Path to the chain description file (JSON)
        #[arg(short, long)]
        data: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Plan {
            data,
            budget,
            format,
        } => commands::plan::run(&data, budget, &format),
        Commands::Inspect { data } => commands::inspect::run(&data),
    }
}
