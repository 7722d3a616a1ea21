//! TileUrl CLI - Command-line interface
//!
//! This binary provides a command-line interface to the tileurl library:
//! expanding bracketed-range templates into endpoint lists and resolving
//! tile coordinates to fetch URLs.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tileurl")]
#[command(about = "Resolve tile coordinates to fetch URLs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a bracketed range template into endpoint templates
    Expand(commands::expand::ExpandArgs),

    /// Resolve a tile coordinate to its fetch URL
    Resolve(commands::resolve::ResolveArgs),
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Expand(args) => commands::expand::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
    };

    if let Err(err) = result {
        err.exit();
    }
}

/// Initialize console logging, configurable via RUST_LOG.
///
/// Defaults to warnings only; diagnostics go to stderr so command output
/// stays pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
