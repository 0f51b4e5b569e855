//! CLI infrastructure for the oxo analysis tool
//!
//! Thin commands that print engine results for a board.

pub mod commands;
pub mod output;

use std::path::Path;

use crate::config::AnalysisConfig;

/// Load the configuration file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> crate::Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_json_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}
