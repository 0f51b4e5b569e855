//! Subcommands of the `oxo` binary

pub mod expecti;
pub mod export;
pub mod minimax;
pub mod states;
