//! Enumeration of the positions reachable by legal play

use std::collections::{HashSet, VecDeque};

use super::board::{Board, CanonicalHash};

/// Every board reachable from the empty board, in breadth-first order.
///
/// Play stops at terminal boards, so no position continues past a win.
/// This is the classic 5,478-position state space.
pub fn reachable_boards() -> Vec<Board> {
    let root = Board::new();
    let mut boards = Vec::new();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while let Some(board) = queue.pop_front() {
        boards.push(board);
        for child in board.all_moves() {
            if visited.insert(child) {
                queue.push_back(child);
            }
        }
    }

    boards
}

/// Distinct canonical hashes of [`reachable_boards`], sorted.
///
/// This corresponds to the classic 765-class enumeration.
pub fn reachable_canonical_hashes() -> Vec<CanonicalHash> {
    let mut hashes: Vec<CanonicalHash> = reachable_boards()
        .iter()
        .map(Board::canonical_hash)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    hashes.sort();
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_board_count_matches_expected() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn reachable_canonical_count_matches_expected() {
        assert_eq!(reachable_canonical_hashes().len(), 765);
    }

    #[test]
    fn breadth_first_order_is_by_moves_played() {
        let boards = reachable_boards();
        assert_eq!(boards[0], Board::new());
        assert!(
            boards
                .windows(2)
                .all(|w| w[0].moves_played() <= w[1].moves_played())
        );
    }
}
