//! Game values with one rational side against a uniformly random one

mod common;

use common::{assert_close, board, open_boards};
use oxo::{CacheEntry, ExpectiMiniMax, MiniMax, NodeKind, Player};

#[test]
fn expectation_nodes_average_over_every_move() {
    for perspective in [Player::X, Player::O] {
        let mut engine = ExpectiMiniMax::new();
        engine.evaluate_root(perspective).unwrap();

        let mut checked = 0;
        for (_, entry) in engine.table(perspective).sorted_entries() {
            let CacheEntry::ExpectationNode {
                score,
                children,
                child_scores,
            } = entry
            else {
                continue;
            };
            let moves_after = children[0].moves_played();
            assert_eq!(children.len(), 10 - moves_after);
            assert_eq!(children.len(), child_scores.len());

            let mean = child_scores.iter().sum::<f64>() / child_scores.len() as f64;
            assert_close(*score, mean);
            checked += 1;
        }
        assert!(checked > 0);
    }
}

#[test]
fn max_nodes_take_the_best_child() {
    let mut engine = ExpectiMiniMax::new();
    engine.evaluate_root(Player::O).unwrap();

    for (_, entry) in engine.table(Player::O).sorted_entries() {
        if entry.kind() != NodeKind::Max {
            continue;
        }
        let best = entry
            .child_scores()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(entry.score(), best);
        let first = entry
            .child_scores()
            .iter()
            .position(|&s| s == best)
            .unwrap();
        assert_eq!(entry.best_move(), Some(&entry.children()[first]));
    }
}

#[test]
fn root_value_depends_on_who_is_rational() {
    let mut engine = ExpectiMiniMax::new();
    let as_x = engine.evaluate_root(Player::X).unwrap();
    let as_o = engine.evaluate_root(Player::O).unwrap();

    // both values are to X, who moves first
    assert!(as_x > 0.0);
    assert!(as_o < 0.0);
    assert_eq!(engine.lookup(Player::X, &oxo::Board::new()).unwrap().kind(), NodeKind::Max);
    assert_eq!(
        engine.lookup(Player::O, &oxo::Board::new()).unwrap().kind(),
        NodeKind::Expectation
    );
}

#[test]
fn random_opponent_is_never_better_than_optimal() {
    let mut minimax = MiniMax::new();
    let mut expecti = ExpectiMiniMax::new();

    for b in open_boards() {
        let optimal = f64::from(minimax.evaluate(&b).unwrap());
        let against_random = expecti.evaluate_as_mover(&b).unwrap();
        assert!(
            against_random >= optimal - 1e-9,
            "{}: {against_random} < {optimal}",
            b.label()
        );
    }
}

#[test]
fn values_stay_within_terminal_bounds() {
    let mut engine = ExpectiMiniMax::new();
    for perspective in [Player::X, Player::O] {
        engine.evaluate_root(perspective).unwrap();
        for (_, entry) in engine.table(perspective).sorted_entries() {
            assert!((-5.0..=5.0).contains(&entry.score()));
        }
    }
}

#[test]
fn repeat_evaluation_is_a_cache_hit() {
    let mut engine = ExpectiMiniMax::new();
    let b = board("X...O....");
    let first = engine.evaluate(Player::O, &b).unwrap();
    let expansions = engine.stats().expansions;

    let again = engine.evaluate(Player::O, &b.transform(oxo::Symmetry::ALL[3])).unwrap();
    assert_eq!(first, again);
    assert_eq!(engine.stats().expansions, expansions);
    assert!(engine.lookup(Player::X, &b).is_err());
}
