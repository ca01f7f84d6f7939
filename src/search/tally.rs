// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search occurrence counts.
//!
//! A `Tally` is created fresh for every search and dropped afterwards; nothing
//! carries over between calls.

use crate::grid::{GridViews, Orientation};
use crate::query::QuerySet;
use indexmap::IndexMap;
use log::trace;
use strum::EnumCount;

const NUM_ORIENTATIONS: usize = Orientation::COUNT;

/// Occurrence counts for one search.
///
/// `counts` only holds words found at least once, in first-seen query order.
/// A word scores one point per orientation in which it appears anywhere, so
/// every count is 1 or 2.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: IndexMap<String, u32>,
    hits: [u64; NUM_ORIENTATIONS],
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    /// Scan every view for every query word.
    pub fn accumulate(views: &GridViews, query: &QuerySet) -> Self {
        let mut tally = Tally::new();
        for word in query.iter() {
            for (orientation, grid) in views.iter() {
                if grid.contains(word) {
                    trace!("{} found in {}", word, orientation);
                    tally.record(word, orientation);
                }
            }
        }
        tally
    }

    /// Count one orientation pass in which `word` was present.
    fn record(&mut self, word: &str, orientation: Orientation) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
        self.hits[orientation.index()] += 1;
    }

    /// Count for `word`, or 0 if it was never found.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of query words found in the given orientation.
    pub fn hits(&self, orientation: Orientation) -> u64 {
        self.hits[orientation.index()]
    }

    /// Number of distinct words found.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Found words with their counts, in first-seen query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}
