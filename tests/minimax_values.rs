//! Game values with both sides playing optimally

mod common;

use common::{board, open_boards};
use oxo::tictactoe::reachable_boards;
use oxo::{CacheEntry, MiniMax, NodeKind, terminal_value};

#[test]
fn empty_board_is_a_draw() {
    let mut engine = MiniMax::new();
    assert_eq!(engine.evaluate_root().unwrap(), 0);
    assert_eq!(engine.len(), 765);
}

#[test]
fn immediate_win_scores_five() {
    let mut engine = MiniMax::new();
    assert_eq!(engine.evaluate(&board("XX.OO....")).unwrap(), 5);
    // O to move, X threatens two lines at once
    assert_eq!(engine.evaluate(&board("X.X.O.X.O")).unwrap(), -3);
}

#[test]
fn terminal_values_depend_on_game_length() {
    for b in reachable_boards().into_iter().filter(|b| b.is_terminal()) {
        let value = terminal_value(&b);
        match b.winner() {
            Some(_) => {
                assert!((-5..=-1).contains(&value), "{}: {value}", b.label());
                assert_eq!(value, b.moves_played() as i32 - 10);
            }
            None => {
                assert_eq!(b.moves_played(), 9);
                assert_eq!(value, 0);
            }
        }
    }
}

#[test]
fn every_value_is_the_best_negated_child() {
    let mut engine = MiniMax::new();
    engine.evaluate_root().unwrap();

    for b in open_boards() {
        let score = engine.evaluate(&b).unwrap();
        let best = b
            .all_moves()
            .iter()
            .map(|child| -engine.evaluate(child).unwrap())
            .max()
            .unwrap();
        assert_eq!(score, best, "{}", b.label());
    }
}

#[test]
fn max_entries_record_the_first_best_child() {
    let mut engine = MiniMax::new();
    engine.evaluate_root().unwrap();

    for (_, entry) in engine.table().sorted_entries() {
        let CacheEntry::MaxNode {
            score,
            best_move,
            children,
            child_scores,
        } = entry
        else {
            assert_eq!(entry.kind(), NodeKind::Terminal);
            continue;
        };
        assert_eq!(children.len(), child_scores.len());
        assert_eq!(*score, *child_scores.iter().max().unwrap());
        let first = child_scores.iter().position(|s| s == score).unwrap();
        assert_eq!(best_move, &children[first]);
    }
}

#[test]
fn symmetric_boards_are_answered_from_the_table() {
    let mut engine = MiniMax::new();
    engine.evaluate_root().unwrap();
    let expansions = engine.stats().expansions;
    let hits = engine.stats().hits;

    for b in board("X...O....").symmetries() {
        assert_eq!(engine.evaluate(&b).unwrap(), 0);
    }

    assert_eq!(engine.stats().expansions, expansions);
    assert_eq!(engine.stats().hits, hits + 8);
}

#[test]
fn expansions_match_table_size() {
    let mut engine = MiniMax::new();
    engine.evaluate(&board("X........")).unwrap();
    assert_eq!(engine.stats().expansions, engine.len() as u64);
    assert!(engine.stats().hits > 0);
}

#[test]
fn principal_line_is_legal_play() {
    let mut engine = MiniMax::new();
    let start = board("X...O....");
    engine.evaluate(&start).unwrap();

    let line = engine.principal_line(&start).unwrap();
    assert_eq!(line[0].board, start);
    for pair in line.windows(2) {
        let pos = pair[0].board.changed_square(&pair[1].board).unwrap();
        assert_eq!(pair[0].board.play(pos).unwrap(), pair[1].board);
        assert_eq!(pair[1].score, -pair[0].score);
    }
    assert!(line.last().unwrap().board.is_terminal());
}
