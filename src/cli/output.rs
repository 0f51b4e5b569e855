//! Output formatting for CLI

use std::fmt::Display;

use crate::tictactoe::{Board, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render the board as a grid with each empty square showing its score.
pub fn score_grid<S, F>(board: &Board, scores: &[Option<S>; 9], format: F) -> String
where
    S: Copy,
    F: Fn(S) -> String,
{
    let cells: Vec<String> = (0..9)
        .map(|pos| match (board.get(pos), scores[pos]) {
            (Cell::Empty, Some(score)) => format(score),
            (cell, _) => cell.to_char().to_string(),
        })
        .collect();
    let width = cells.iter().map(String::len).max().unwrap_or(1);

    cells
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a numbered sequence of boards with their scores
pub fn print_line<S: Display>(steps: &[(Board, S)]) {
    for (ply, (board, score)) in steps.iter().enumerate() {
        println!("\nply {ply}  score={score}");
        println!("{board}");
    }
}
