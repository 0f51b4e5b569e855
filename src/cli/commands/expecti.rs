//! Expecti command - optimal play against a random opponent

use anyhow::Result;
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::output::{print_kv, print_line, print_section, score_grid},
    config::AnalysisConfig,
    search::ExpectiMiniMax,
    tictactoe::Player,
};

#[derive(Args, Debug)]
pub struct ExpectiArgs {
    /// Board to evaluate (e.g. "X...O...."); defaults to the configured board
    #[arg(long)]
    pub board: Option<String>,

    /// Side that plays optimally (X or O)
    #[arg(long)]
    pub perspective: Option<Player>,

    /// Print the value of every empty square
    #[arg(long)]
    pub squares: bool,

    /// Play out one sampled game
    #[arg(long)]
    pub sample: bool,

    /// Seed for the sampled game
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: ExpectiArgs, config: AnalysisConfig) -> Result<()> {
    let mut config = match args.board {
        Some(board) => config.with_board(board),
        None => config,
    };
    if let Some(perspective) = args.perspective {
        config = config.with_perspective(perspective);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let board = config.board()?;
    let perspective = config.perspective;

    let mut engine = ExpectiMiniMax::new();
    let score = engine.evaluate(perspective, &board)?;

    print_section("Expectiminimax evaluation");
    println!("{board}\n");
    print_kv("rational side", &perspective.to_string());
    print_kv("random side", &perspective.opponent().to_string());
    print_kv("side to move", &board.side_to_move().to_string());
    print_kv("score", &format!("{score:.3}"));
    print_kv("memo entries", &engine.len().to_string());
    print_kv("cache hits", &engine.stats().hits.to_string());

    if args.squares && !board.is_terminal() {
        let scores = engine.square_scores(perspective, &board)?;
        println!("\nSquare values for {}:", board.side_to_move());
        println!("{}", score_grid(&board, &scores, |s| format!("{s:.2}")));
    }

    if args.sample {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let steps: Vec<_> = engine
            .sample_line(perspective, &board, &mut rng)?
            .into_iter()
            .map(|step| {
                let mover = step.board.side_to_move();
                (step.board, format!("{:.3} ({mover} to move)", step.score))
            })
            .collect();
        print_section("Sampled game");
        print_line(&steps);
    }

    Ok(())
}
