//! aptreg CLI — student registration and aptitude testing at the console.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aptreg_core::error::SessionError;

mod commands;

/// Exit code used when an intake value is out of range.
const REJECTED_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "aptreg",
    version,
    about = "Student registration and aptitude test"
)]
struct Cli {
    /// Log debug events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register students interactively and run their aptitude tests
    Register {
        /// CSV record store to append to
        #[arg(long)]
        store: Option<PathBuf>,

        /// Seed for reproducible quizzes
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the summary report for every stored student
    Summary {
        /// CSV record store to read
        #[arg(long)]
        store: Option<PathBuf>,

        /// Output format: text, table, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter aptreg.toml
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_directive = if cli.verbose {
        "aptreg=debug"
    } else {
        "aptreg=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Register {
            store,
            seed,
            config,
        } => commands::register::execute(store, seed, config),
        Commands::Summary {
            store,
            format,
            config,
        } => commands::summary::execute(store, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        // The session already printed the rejection message.
        if e
            .downcast_ref::<SessionError>()
            .is_some_and(SessionError::is_rejection)
        {
            process::exit(REJECTED_EXIT_CODE);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
