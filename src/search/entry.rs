//! Memo table records

use serde::Serialize;

use crate::tictactoe::Board;

/// Which kind of node produced a [`CacheEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Terminal,
    Max,
    Expectation,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Terminal => "terminal",
            NodeKind::Max => "max",
            NodeKind::Expectation => "expectation",
        }
    }
}

/// Result of evaluating one canonical position.
///
/// Scores are from the point of view of the side to move. `child_scores[i]`
/// is the already negated value of `children[i]`, so it is directly
/// comparable with `score`. Children are stored in the orientation of the
/// board that was evaluated first for this canonical hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CacheEntry<S> {
    /// Finished game
    Terminal { score: S },
    /// The mover chooses; `best_move` is the first child with the top score
    MaxNode {
        score: S,
        best_move: Board,
        children: Vec<Board>,
        child_scores: Vec<S>,
    },
    /// The mover plays uniformly at random; `score` is the mean of
    /// `child_scores` over every physical move
    ExpectationNode {
        score: S,
        children: Vec<Board>,
        child_scores: Vec<S>,
    },
}

impl<S: Copy> CacheEntry<S> {
    pub fn score(&self) -> S {
        match self {
            CacheEntry::Terminal { score }
            | CacheEntry::MaxNode { score, .. }
            | CacheEntry::ExpectationNode { score, .. } => *score,
        }
    }

    pub fn best_move(&self) -> Option<&Board> {
        match self {
            CacheEntry::MaxNode { best_move, .. } => Some(best_move),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Board] {
        match self {
            CacheEntry::Terminal { .. } => &[],
            CacheEntry::MaxNode { children, .. } | CacheEntry::ExpectationNode { children, .. } => {
                children
            }
        }
    }

    pub fn child_scores(&self) -> &[S] {
        match self {
            CacheEntry::Terminal { .. } => &[],
            CacheEntry::MaxNode { child_scores, .. }
            | CacheEntry::ExpectationNode { child_scores, .. } => child_scores,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            CacheEntry::Terminal { .. } => NodeKind::Terminal,
            CacheEntry::MaxNode { .. } => NodeKind::Max,
            CacheEntry::ExpectationNode { .. } => NodeKind::Expectation,
        }
    }
}
