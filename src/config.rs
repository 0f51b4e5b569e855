//! Analysis configuration shared by the CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    export::ExportFormat,
    tictactoe::{Board, Player},
};

/// Settings for one analysis run.
///
/// Can be loaded from JSON; command-line flags override individual fields.
///
/// # Examples
///
/// ```
/// use oxo::config::AnalysisConfig;
/// use oxo::tictactoe::Player;
///
/// let config = AnalysisConfig::default()
///     .with_board("X...O....")
///     .with_perspective(Player::O)
///     .with_seed(7);
/// assert_eq!(config.board().unwrap().moves_played(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Board in text form, e.g. `X...O....`
    pub board: String,
    /// Rational side for expectiminimax
    pub perspective: Player,
    /// Seed for sampled lines; `None` draws from the OS
    pub seed: Option<u64>,
    /// Format used by table exports
    pub export_format: ExportFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            board: Board::new().label(),
            perspective: Player::X,
            seed: None,
            export_format: ExportFormat::default(),
        }
    }
}

impl AnalysisConfig {
    /// Read a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured board parses.
    pub fn validate(&self) -> crate::Result<()> {
        self.board()
            .map(|_| ())
            .map_err(|e| crate::Error::InvalidConfiguration {
                message: format!("board '{}': {e}", self.board),
            })
    }

    pub fn board(&self) -> crate::Result<Board> {
        Board::from_string(&self.board)
    }

    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = board.into();
        self
    }

    pub fn with_perspective(mut self, perspective: Player) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty_board() {
        let config = AnalysisConfig::default();
        assert_eq!(config.board().unwrap(), Board::new());
        assert_eq!(config.perspective, Player::X);
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{"perspective": "O", "seed": 3}"#).unwrap();
        assert_eq!(config.perspective, Player::O);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.board().unwrap(), Board::new());
    }

    #[test]
    fn rejects_malformed_board() {
        let err = AnalysisConfig::from_json_str(r#"{"board": "OO......."}"#).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn export_format_parses_lowercase() {
        let config = AnalysisConfig::from_json_str(r#"{"export_format": "csv"}"#).unwrap();
        assert_eq!(config.export_format, ExportFormat::Csv);
    }
}
