//! Full-information negamax with one global memo table

use log::{debug, trace};

use super::{
    CacheEntry, LineStep, MemoTable, SearchStats, first_max, negated_scores, oriented_child,
    square_scores_with, terminal_value,
};
use crate::tictactoe::Board;

/// Both sides play optimally.
///
/// Values depend only on the position, so a single table serves both
/// players.
#[derive(Debug, Clone, Default)]
pub struct MiniMax {
    table: MemoTable<i32>,
}

fn negamax(table: &mut MemoTable<i32>, board: &Board) -> crate::Result<i32> {
    let hash = board.canonical_hash();
    if let Some(score) = table.probe(hash) {
        return Ok(score);
    }

    if board.is_terminal() {
        let score = terminal_value(board);
        return Ok(table.insert(hash, CacheEntry::Terminal { score }));
    }

    // symmetric children share a value, so skipping them cannot change the max
    let children = board.unique_moves();
    let child_scores = negated_scores(&children, |child| negamax(table, child))?;
    let (best_idx, score) =
        first_max(&child_scores).ok_or_else(|| crate::Error::NoMovesAvailable {
            board: board.label(),
        })?;

    trace!("minimax {} -> {score}", board.label());
    let best_move = children[best_idx];
    Ok(table.insert(
        hash,
        CacheEntry::MaxNode {
            score,
            best_move,
            children,
            child_scores,
        },
    ))
}

impl MiniMax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `board` to its side to move.
    pub fn evaluate(&mut self, board: &Board) -> crate::Result<i32> {
        let score = negamax(&mut self.table, board)?;
        debug!(
            "minimax evaluated {} = {score} ({} entries, {} hits)",
            board.label(),
            self.table.len(),
            self.table.stats().hits
        );
        Ok(score)
    }

    /// Value of the empty board
    pub fn evaluate_root(&mut self) -> crate::Result<i32> {
        self.evaluate(&Board::new())
    }

    /// Cached record for `board`'s orbit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotEvaluated`] until the orbit has been
    /// reached by [`MiniMax::evaluate`].
    pub fn lookup(&self, board: &Board) -> crate::Result<&CacheEntry<i32>> {
        self.table.lookup(board)
    }

    pub fn table(&self) -> &MemoTable<i32> {
        &self.table
    }

    pub fn stats(&self) -> SearchStats {
        self.table.stats()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Follow best moves from an evaluated board down to the end of the game.
    ///
    /// Each step is oriented as a real continuation of the previous board.
    pub fn principal_line(&self, board: &Board) -> crate::Result<Vec<LineStep<i32>>> {
        let mut line = Vec::new();
        let mut current = *board;
        loop {
            let entry = self.lookup(&current)?;
            line.push(LineStep {
                board: current,
                score: entry.score(),
            });
            let Some(best) = entry.best_move() else {
                break;
            };
            current = oriented_child(&current, best).ok_or_else(|| {
                crate::Error::NoMovesAvailable {
                    board: current.label(),
                }
            })?;
        }
        Ok(line)
    }

    /// Value of each empty square to the side to move of `board`.
    ///
    /// Occupied squares, and every square of a finished game, are `None`.
    pub fn square_scores(&mut self, board: &Board) -> crate::Result<[Option<i32>; 9]> {
        square_scores_with(board, |child| self.evaluate(child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn empty_board_is_a_draw() {
        let mut engine = MiniMax::new();
        assert_eq!(engine.evaluate_root().unwrap(), 0);
        assert_eq!(engine.len(), 765);
    }

    #[test]
    fn immediate_win_scores_five() {
        let mut engine = MiniMax::new();
        let b = board("XX.OO....");
        assert_eq!(engine.evaluate(&b).unwrap(), 5);

        let entry = engine.lookup(&b).unwrap();
        assert_eq!(entry.best_move(), Some(&board("XXXOO....")));
    }

    #[test]
    fn terminal_board_is_cached_as_terminal() {
        let mut engine = MiniMax::new();
        let b = board("XXXOO....");
        assert_eq!(engine.evaluate(&b).unwrap(), -5);
        let entry = engine.lookup(&b).unwrap();
        assert_eq!(entry.kind(), crate::search::NodeKind::Terminal);
        assert!(entry.best_move().is_none());
    }

    #[test]
    fn lookup_before_evaluate_fails() {
        let engine = MiniMax::new();
        assert!(matches!(
            engine.lookup(&Board::new()),
            Err(crate::Error::NotEvaluated { .. })
        ));
    }

    #[test]
    fn second_evaluation_is_a_cache_hit() {
        let mut engine = MiniMax::new();
        let b = board("X...O....");
        let first = engine.evaluate(&b).unwrap();
        let before = engine.stats();

        let second = engine.evaluate(&b).unwrap();
        let after = engine.stats();
        assert_eq!(first, second);
        assert_eq!(after.hits, before.hits + 1);
        assert_eq!(after.expansions, before.expansions);

        // a rotated copy is the same cache key
        let rotated = board("..X.O....");
        assert_eq!(engine.evaluate(&rotated).unwrap(), first);
        assert_eq!(engine.stats().hits, before.hits + 2);
    }

    #[test]
    fn corner_opening_only_centre_reply_holds() {
        let mut engine = MiniMax::new();
        let corner = board("X........");
        let scores = engine.square_scores(&corner).unwrap();
        assert_eq!(scores[0], None);
        assert_eq!(scores[4], Some(0));
        for square in [1, 2, 3, 5, 6, 7, 8] {
            assert!(scores[square].unwrap() < 0, "square {square} should lose");
        }
    }

    #[test]
    fn principal_line_ends_in_a_draw() {
        let mut engine = MiniMax::new();
        engine.evaluate_root().unwrap();
        let line = engine.principal_line(&Board::new()).unwrap();

        assert_eq!(line.len(), 10);
        assert!(line.iter().all(|step| step.score == 0));
        for pair in line.windows(2) {
            assert!(pair[0].board.all_moves().contains(&pair[1].board));
        }
        let last = line.last().unwrap().board;
        assert!(last.is_terminal());
        assert_eq!(last.winner(), None);
    }
}
