//! Memoized game-tree evaluators
//!
//! Both engines score a board from the point of view of the side to move,
//! negating child values on the way up (negamax). They share the terminal
//! scoring rule and a write-once [`MemoTable`] keyed by canonical hash.

pub mod entry;
pub mod expectiminimax;
pub mod memo;
pub mod minimax;

use std::ops::{Add, Neg};

use serde::Serialize;

pub use entry::{CacheEntry, NodeKind};
pub use expectiminimax::ExpectiMiniMax;
pub use memo::MemoTable;
pub use minimax::MiniMax;

use crate::tictactoe::Board;

/// Value of a finished game to the side that would move next.
///
/// A draw is 0. A win is `-(10 - moves_played)`: the loser is to move, and a
/// quicker loss is worse, so scores run from -5 (won on move 5) to -1 (won on
/// move 9).
pub fn terminal_value(board: &Board) -> i32 {
    match board.winner() {
        None => 0,
        Some(_) => -(10 - board.moves_played() as i32),
    }
}

/// Cache counters for one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls answered straight from the memo table
    pub hits: u64,
    /// Nodes computed and inserted into the memo table
    pub expansions: u64,
}

impl Add for SearchStats {
    type Output = SearchStats;

    fn add(self, other: SearchStats) -> SearchStats {
        SearchStats {
            hits: self.hits + other.hits,
            expansions: self.expansions + other.expansions,
        }
    }
}

/// One position along a replayed line, with its cached score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStep<S> {
    pub board: Board,
    pub score: S,
}

/// Index and value of the first maximum in `scores`.
///
/// Later moves only replace the incumbent when strictly better, so ties go to
/// the earliest move in generation order.
pub(crate) fn first_max<S: Copy + PartialOrd>(scores: &[S]) -> Option<(usize, S)> {
    let mut best: Option<(usize, S)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, incumbent)) if score <= incumbent => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}

/// Negated child values, in the order the children are given.
pub(crate) fn negated_scores<S, F>(children: &[Board], mut evaluate: F) -> crate::Result<Vec<S>>
where
    S: Neg<Output = S>,
    F: FnMut(&Board) -> crate::Result<S>,
{
    children.iter().map(|child| evaluate(child).map(Neg::neg)).collect()
}

/// The child of `board` in the same orbit as `target`.
///
/// Cached children belong to whichever orientation of a position was
/// evaluated first, so they are re-oriented before being followed.
pub(crate) fn oriented_child(board: &Board, target: &Board) -> Option<Board> {
    let wanted = target.canonical_hash();
    board
        .all_moves()
        .into_iter()
        .find(|child| child.canonical_hash() == wanted)
}

/// Per-square child values of `board`, as seen by its side to move.
pub(crate) fn square_scores_with<S, F>(board: &Board, mut evaluate: F) -> crate::Result<[Option<S>; 9]>
where
    S: Copy + Neg<Output = S>,
    F: FnMut(&Board) -> crate::Result<S>,
{
    let mut scores = [None; 9];
    for child in board.all_moves() {
        if let Some(square) = board.changed_square(&child) {
            scores[square] = Some(-evaluate(&child)?);
        }
    }
    Ok(scores)
}
