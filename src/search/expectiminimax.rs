//! Optimal player against a uniformly random opponent

use std::collections::HashMap;

use log::{debug, trace};
use rand::{Rng, seq::IndexedRandom};

use super::{
    CacheEntry, LineStep, MemoTable, SearchStats, first_max, negated_scores, oriented_child,
    square_scores_with, terminal_value,
};
use crate::tictactoe::{Board, CanonicalHash, Player};

/// One side (the perspective player) maximises; the other moves at random.
///
/// The same board is worth different amounts depending on which side is
/// the rational one, so each perspective has its own table.
#[derive(Debug, Clone, Default)]
pub struct ExpectiMiniMax {
    tables: [MemoTable<f64>; 2],
}

fn expectimax(
    table: &mut MemoTable<f64>,
    perspective: Player,
    board: &Board,
) -> crate::Result<f64> {
    let hash = board.canonical_hash();
    if let Some(score) = table.probe(hash) {
        return Ok(score);
    }

    if board.is_terminal() {
        let score = f64::from(terminal_value(board));
        return Ok(table.insert(hash, CacheEntry::Terminal { score }));
    }

    let entry = if board.side_to_move() == perspective {
        max_node(table, perspective, board)?
    } else {
        expectation_node(table, perspective, board)?
    };
    trace!(
        "expectimax[{perspective}] {} -> {}",
        board.label(),
        entry.score()
    );
    Ok(table.insert(hash, entry))
}

fn max_node(
    table: &mut MemoTable<f64>,
    perspective: Player,
    board: &Board,
) -> crate::Result<CacheEntry<f64>> {
    let children = board.unique_moves();
    let child_scores = negated_scores(&children, |child| expectimax(table, perspective, child))?;
    let (best_idx, score) =
        first_max(&child_scores).ok_or_else(|| crate::Error::NoMovesAvailable {
            board: board.label(),
        })?;

    Ok(CacheEntry::MaxNode {
        score,
        best_move: children[best_idx],
        children,
        child_scores,
    })
}

/// Mean over every physical move, symmetric duplicates included.
///
/// A duplicate reuses the value already computed for its orbit but still
/// counts once per occurrence. Summation runs in move order.
fn expectation_node(
    table: &mut MemoTable<f64>,
    perspective: Player,
    board: &Board,
) -> crate::Result<CacheEntry<f64>> {
    let children = board.all_moves();
    if children.is_empty() {
        return Err(crate::Error::NoMovesAvailable {
            board: board.label(),
        });
    }

    let mut seen: HashMap<CanonicalHash, f64> = HashMap::new();
    let mut child_scores = Vec::with_capacity(children.len());
    for child in &children {
        let hash = child.canonical_hash();
        let score = match seen.get(&hash) {
            Some(&score) => score,
            None => {
                let score = -expectimax(table, perspective, child)?;
                seen.insert(hash, score);
                score
            }
        };
        child_scores.push(score);
    }

    let score = child_scores.iter().sum::<f64>() / child_scores.len() as f64;
    Ok(CacheEntry::ExpectationNode {
        score,
        children,
        child_scores,
    })
}

impl ExpectiMiniMax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `board` to its side to move, with `perspective` as the
    /// rational side.
    pub fn evaluate(&mut self, perspective: Player, board: &Board) -> crate::Result<f64> {
        let table = &mut self.tables[perspective.index()];
        let score = expectimax(table, perspective, board)?;
        debug!(
            "expectimax[{perspective}] evaluated {} = {score:.4} ({} entries, {} hits)",
            board.label(),
            table.len(),
            table.stats().hits
        );
        Ok(score)
    }

    /// Evaluate with the side to move as the rational side.
    pub fn evaluate_as_mover(&mut self, board: &Board) -> crate::Result<f64> {
        self.evaluate(board.side_to_move(), board)
    }

    /// Value of the empty board for the given perspective
    pub fn evaluate_root(&mut self, perspective: Player) -> crate::Result<f64> {
        self.evaluate(perspective, &Board::new())
    }

    /// Cached record for `board`'s orbit in `perspective`'s table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotEvaluated`] until the orbit has been
    /// reached by [`ExpectiMiniMax::evaluate`] for that perspective.
    pub fn lookup(&self, perspective: Player, board: &Board) -> crate::Result<&CacheEntry<f64>> {
        self.table(perspective).lookup(board)
    }

    pub fn table(&self, perspective: Player) -> &MemoTable<f64> {
        &self.tables[perspective.index()]
    }

    /// Counters summed over both perspectives
    pub fn stats(&self) -> SearchStats {
        self.tables[0].stats() + self.tables[1].stats()
    }

    /// Total entries over both perspectives
    pub fn len(&self) -> usize {
        self.tables.iter().map(MemoTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(MemoTable::is_empty)
    }

    /// Value of each empty square to the side to move of `board`.
    pub fn square_scores(
        &mut self,
        perspective: Player,
        board: &Board,
    ) -> crate::Result<[Option<f64>; 9]> {
        square_scores_with(board, |child| self.evaluate(perspective, child))
    }

    /// Play one game out from `board`: the perspective player follows its
    /// best moves and the other side picks uniformly among its legal moves.
    pub fn sample_line<R: Rng + ?Sized>(
        &mut self,
        perspective: Player,
        board: &Board,
        rng: &mut R,
    ) -> crate::Result<Vec<LineStep<f64>>> {
        self.evaluate(perspective, board)?;

        let mut line = Vec::new();
        let mut current = *board;
        loop {
            let entry = self.lookup(perspective, &current)?;
            line.push(LineStep {
                board: current,
                score: entry.score(),
            });

            let next = match entry {
                CacheEntry::Terminal { .. } => break,
                CacheEntry::MaxNode { best_move, .. } => oriented_child(&current, best_move),
                CacheEntry::ExpectationNode { .. } => current.all_moves().choose(rng).copied(),
            };
            current = next.ok_or_else(|| crate::Error::NoMovesAvailable {
                board: current.label(),
            })?;
        }
        Ok(line)
    }
}
