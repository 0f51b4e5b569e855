//! Minimax command - optimal play by both sides

use anyhow::Result;
use clap::Args;

use crate::{
    cli::output::{print_kv, print_line, print_section, score_grid},
    config::AnalysisConfig,
    search::MiniMax,
};

#[derive(Args, Debug)]
pub struct MinimaxArgs {
    /// Board to evaluate (e.g. "X...O...."); defaults to the configured board
    #[arg(long)]
    pub board: Option<String>,

    /// Print the principal line
    #[arg(long)]
    pub line: bool,

    /// Print the value of every empty square
    #[arg(long)]
    pub squares: bool,
}

pub fn execute(args: MinimaxArgs, config: AnalysisConfig) -> Result<()> {
    let config = match args.board {
        Some(board) => config.with_board(board),
        None => config,
    };
    let board = config.board()?;

    let mut engine = MiniMax::new();
    let score = engine.evaluate(&board)?;

    print_section("Minimax evaluation");
    println!("{board}\n");
    print_kv("side to move", &board.side_to_move().to_string());
    print_kv("score", &score.to_string());
    print_kv("memo entries", &engine.len().to_string());
    print_kv("cache hits", &engine.stats().hits.to_string());

    if args.squares && !board.is_terminal() {
        let scores = engine.square_scores(&board)?;
        println!("\nSquare values for {}:", board.side_to_move());
        println!("{}", score_grid(&board, &scores, |s| s.to_string()));
    }

    if args.line {
        let steps: Vec<_> = engine
            .principal_line(&board)?
            .into_iter()
            .map(|step| (step.board, step.score))
            .collect();
        print_section("Principal line");
        print_line(&steps);
    }

    Ok(())
}
