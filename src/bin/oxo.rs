//! oxo CLI - exact Tic-Tac-Toe evaluation against optimal and random opponents

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Minimax and expectiminimax analysis of Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine activity at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a board with both sides playing optimally
    Minimax(oxo::cli::commands::minimax::MinimaxArgs),

    /// Evaluate a board with one side playing at random
    Expecti(oxo::cli::commands::expecti::ExpectiArgs),

    /// Count reachable positions and symmetry classes
    States,

    /// Write an evaluated memo table to JSON or CSV
    Export(oxo::cli::commands::export::ExportArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = oxo::cli::load_config(cli.config.as_deref())?;
    log::debug!("configuration: {config:?}");

    match cli.command {
        Commands::Minimax(args) => oxo::cli::commands::minimax::execute(args, config),
        Commands::Expecti(args) => oxo::cli::commands::expecti::execute(args, config),
        Commands::States => oxo::cli::commands::states::execute(),
        Commands::Export(args) => oxo::cli::commands::export::execute(args, config),
    }
}
