//! Write-once memo table keyed by canonical hash

use std::collections::{HashMap, hash_map::Entry};

use super::{CacheEntry, SearchStats};
use crate::tictactoe::{Board, CanonicalHash};

/// Evaluated positions of one engine (or one perspective of an engine).
///
/// A binding, once inserted, is never replaced for the lifetime of the
/// table.
#[derive(Debug, Clone)]
pub struct MemoTable<S> {
    entries: HashMap<CanonicalHash, CacheEntry<S>>,
    stats: SearchStats,
}

impl<S: Copy> MemoTable<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    /// Cached score for `hash`, counting a hit when present.
    pub(crate) fn probe(&mut self, hash: CanonicalHash) -> Option<S> {
        let score = self.entries.get(&hash).map(CacheEntry::score)?;
        self.stats.hits += 1;
        Some(score)
    }

    /// Record a freshly computed entry and return its score.
    ///
    /// An existing binding is kept as is.
    pub(crate) fn insert(&mut self, hash: CanonicalHash, entry: CacheEntry<S>) -> S {
        match self.entries.entry(hash) {
            Entry::Occupied(existing) => {
                log::warn!("memo entry for {hash} already present; keeping the first");
                existing.get().score()
            }
            Entry::Vacant(slot) => {
                self.stats.expansions += 1;
                slot.insert(entry).score()
            }
        }
    }

    pub fn get(&self, hash: CanonicalHash) -> Option<&CacheEntry<S>> {
        self.entries.get(&hash)
    }

    /// Entry for `board`'s orbit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotEvaluated`] if no board in the orbit has
    /// been evaluated yet.
    pub fn lookup(&self, board: &Board) -> crate::Result<&CacheEntry<S>> {
        self.get(board.canonical_hash())
            .ok_or_else(|| crate::Error::NotEvaluated {
                board: board.label(),
            })
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.entries.contains_key(&board.canonical_hash())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// All entries ordered by canonical hash
    pub fn sorted_entries(&self) -> Vec<(CanonicalHash, &CacheEntry<S>)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(&hash, entry)| (hash, entry)).collect();
        entries.sort_by_key(|(hash, _)| *hash);
        entries
    }
}

impl<S: Copy> Default for MemoTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
