//! States command - size of the reachable state space

use anyhow::Result;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    tictactoe::{reachable_boards, reachable_canonical_hashes},
};

pub fn execute() -> Result<()> {
    let boards = reachable_boards();
    let terminal = boards.iter().filter(|board| board.is_terminal()).count();
    let classes = reachable_canonical_hashes();

    print_section("Reachable positions");
    print_kv("boards", &format_number(boards.len()));
    print_kv("terminal boards", &format_number(terminal));
    print_kv("symmetry classes", &format_number(classes.len()));

    println!("\nBoards by moves played:");
    for moves in 0..=9 {
        let count = boards
            .iter()
            .filter(|board| board.moves_played() == moves)
            .count();
        println!("  {moves}: {}", format_number(count));
    }

    Ok(())
}
