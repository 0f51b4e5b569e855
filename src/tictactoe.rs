//! Tic-Tac-Toe board, symmetry group and state-space enumeration

pub mod board;
pub mod lines;
pub mod reachable;
pub mod symmetry;

pub use board::{Board, CanonicalHash, Cell, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use reachable::{reachable_boards, reachable_canonical_hashes};
pub use symmetry::Symmetry;
