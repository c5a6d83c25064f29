//! # sopcat CLI entry point
//!
//! Parses command-line arguments, loads the catalog bundle, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sopcat_catalog::Catalog;
use sopcat_cli::commands::{
    run_categories, run_list, run_show, run_stats, ListArgs, ShowArgs,
};
use sopcat_cli::resolve_bundle_path;

/// SOPCAT — procedure catalog query toolchain.
///
/// Loads a catalog bundle (JSON) and answers filtered listing, grouped,
/// lookup, and statistics queries against it.
#[derive(Parser, Debug)]
#[command(name = "sopcat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the catalog bundle file (or set SOPCAT_BUNDLE).
    #[arg(long, global = true)]
    bundle: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filtered, paginated procedure listing (optionally grouped).
    List(ListArgs),

    /// Show a single procedure by id or sop_number.
    Show(ShowArgs),

    /// List active categories.
    Categories,

    /// Print the compliance statistics snapshot.
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let bundle_path = resolve_bundle_path(cli.bundle)?;
    tracing::debug!(path = %bundle_path.display(), "loading catalog bundle");
    let catalog = Catalog::load_from_path(&bundle_path)?;

    match &cli.command {
        Commands::List(args) => run_list(&catalog, args),
        Commands::Show(args) => run_show(&catalog, args),
        Commands::Categories => run_categories(&catalog),
        Commands::Stats => run_stats(&catalog),
    }
}
