//! Shared helpers for the integration tests.

#![allow(dead_code)]

use oxo::Board;
use oxo::tictactoe::reachable_boards;

pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Reachable positions that still have a move to make
pub fn open_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
