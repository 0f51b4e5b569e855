//! Export functionality for analysis and research
//!
//! Writes evaluated memo tables to JSON or CSV for plotting and inspection.
//! Nothing written here is ever read back into an engine.

mod table;

use std::{fmt, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use table::{EntryRecord, records, write_csv, write_json};

use crate::{Result, search::MemoTable};

/// Output format for table exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `table` to `path` in the given format. Returns the record count.
pub fn write_table<S>(table: &MemoTable<S>, path: &Path, format: ExportFormat) -> Result<usize>
where
    S: Copy + Into<f64>,
{
    match format {
        ExportFormat::Json => write_json(table, path),
        ExportFormat::Csv => write_csv(table, path),
    }
}
