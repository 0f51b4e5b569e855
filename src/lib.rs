//! Exact game-theoretic values for Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board with symmetry-canonicalizing hashes
//! - A memoized negamax engine (both sides optimal)
//! - A memoized expectiminimax engine (one side optimal, the other random)
//! - Reachable state-space enumeration and table export

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    CacheEntry, ExpectiMiniMax, LineStep, MemoTable, MiniMax, NodeKind, SearchStats, terminal_value,
};
pub use tictactoe::{Board, CanonicalHash, Cell, Player, Symmetry};
