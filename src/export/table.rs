//! JSON and CSV reports of an engine's memo table

use std::{fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::{Result, search::MemoTable};

/// One memo entry, flattened for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRecord {
    pub hash: u32,
    pub board: String,
    pub kind: &'static str,
    pub score: f64,
    pub best_move: Option<String>,
    pub children: Vec<String>,
    pub child_scores: Vec<f64>,
}

/// CSV has no nested sequences, so list columns are space separated.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    hash: u32,
    board: &'a str,
    kind: &'a str,
    score: f64,
    best_move: &'a str,
    children: String,
    child_scores: String,
}

impl<'a> From<&'a EntryRecord> for CsvRow<'a> {
    fn from(record: &'a EntryRecord) -> Self {
        CsvRow {
            hash: record.hash,
            board: &record.board,
            kind: record.kind,
            score: record.score,
            best_move: record.best_move.as_deref().unwrap_or(""),
            children: record.children.join(" "),
            child_scores: record
                .child_scores
                .iter()
                .map(|score| score.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Records for every entry, ordered by canonical hash.
///
/// `board` is the orbit member with the smallest encoding, which may differ
/// from the orientation its children were generated from.
pub fn records<S>(table: &MemoTable<S>) -> Vec<EntryRecord>
where
    S: Copy + Into<f64>,
{
    table
        .sorted_entries()
        .into_iter()
        .map(|(hash, entry)| EntryRecord {
            hash: hash.value(),
            board: decode_label(hash.value()),
            kind: entry.kind().as_str(),
            score: entry.score().into(),
            best_move: entry.best_move().map(|board| board.label()),
            children: entry.children().iter().map(|board| board.label()).collect(),
            child_scores: entry.child_scores().iter().map(|&s| s.into()).collect(),
        })
        .collect()
}

/// Board label for a base-3 encoding (cell 0 is the least significant digit).
fn decode_label(mut encoding: u32) -> String {
    let mut label = String::with_capacity(9);
    for _ in 0..9 {
        label.push(match encoding % 3 {
            1 => 'X',
            2 => 'O',
            _ => '.',
        });
        encoding /= 3;
    }
    label
}

/// Write the table as a pretty-printed JSON array. Returns the record count.
pub fn write_json<S>(table: &MemoTable<S>, path: &Path) -> Result<usize>
where
    S: Copy + Into<f64>,
{
    let records = records(table);
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(records.len())
}

/// Write the table as CSV with a header row. Returns the record count.
pub fn write_csv<S>(table: &MemoTable<S>, path: &Path) -> Result<usize>
where
    S: Copy + Into<f64>,
{
    let records = records(table);
    let mut writer = csv::Writer::from_path(path)?;
    for record in &records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::MiniMax, tictactoe::Board};

    #[test]
    fn decode_inverts_encode() {
        for board in Board::new().all_moves() {
            assert_eq!(decode_label(board.encode()), board.label());
        }
        assert_eq!(decode_label(0), ".........");
    }

    #[test]
    fn records_follow_hash_order() {
        let mut engine = MiniMax::new();
        engine.evaluate(&Board::from_string("XX.OO....").unwrap()).unwrap();
        let records = records(engine.table());
        assert_eq!(records.len(), engine.len());
        assert!(records.windows(2).all(|w| w[0].hash < w[1].hash));
        assert!(
            records
                .iter()
                .all(|r| r.children.len() == r.child_scores.len())
        );
    }
}
