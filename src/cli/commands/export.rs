//! Export command - write an evaluated memo table to disk

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{
    config::AnalysisConfig,
    export::{ExportFormat, write_table},
    search::{ExpectiMiniMax, MiniMax},
    tictactoe::Player,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum EngineKind {
    Minimax,
    Expecti,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Engine whose table is exported
    #[arg(long, value_enum, default_value = "minimax")]
    pub engine: EngineKind,

    /// Rational side for the expecti engine
    #[arg(long)]
    pub perspective: Option<Player>,

    /// Board to evaluate before exporting; defaults to the configured board
    #[arg(long)]
    pub board: Option<String>,

    /// Output file
    #[arg(long)]
    pub output: PathBuf,

    /// Output format; defaults to the configured format
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

pub fn execute(args: ExportArgs, config: AnalysisConfig) -> Result<()> {
    let mut config = match args.board {
        Some(board) => config.with_board(board),
        None => config,
    };
    if let Some(perspective) = args.perspective {
        config = config.with_perspective(perspective);
    }
    if let Some(format) = args.format {
        config = config.with_export_format(format);
    }
    let board = config.board()?;

    let written = match args.engine {
        EngineKind::Minimax => {
            let mut engine = MiniMax::new();
            engine.evaluate(&board)?;
            write_table(engine.table(), &args.output, config.export_format)
        }
        EngineKind::Expecti => {
            let mut engine = ExpectiMiniMax::new();
            engine.evaluate(config.perspective, &board)?;
            write_table(
                engine.table(config.perspective),
                &args.output,
                config.export_format,
            )
        }
    }
    .with_context(|| format!("failed to export to {}", args.output.display()))?;

    println!(
        "Exported {written} entries as {} to {}",
        config.export_format,
        args.output.display()
    );
    Ok(())
}
