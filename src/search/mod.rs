// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Match accumulation and ranking.
//!
//! A search proceeds in two steps over the precomputed [`GridViews`]:
//!
//! 1. **Accumulate**: for each query word, test each orientation once and
//!    add one to the word's count if it occurs in any row of that view.
//! 2. **Rank**: order found words by descending count and keep the first
//!    `limit` of them.
//!
//! Ties keep first-seen query order, because the tally is insertion-ordered
//! and the sort is stable.
//!
//! [`GridViews`]: crate::grid::GridViews

pub mod tally;

pub use tally::Tally;

use crate::grid::Orientation;

/// A found word and the number of orientations it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub count: u32,
}

/// Ranked matches for one search, with per-orientation statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Distinct non-empty words after normalization.
    pub queried: usize,

    /// Ranked matches, at most the configured limit.
    pub matches: Vec<Match>,

    /// Words found in rows.
    pub row_hits: u64,

    /// Words found in columns.
    pub column_hits: u64,
}

impl SearchReport {
    pub(crate) fn empty() -> Self {
        Self {
            queried: 0,
            matches: Vec::new(),
            row_hits: 0,
            column_hits: 0,
        }
    }

    pub(crate) fn from_tally(queried: usize, tally: &Tally, limit: usize) -> Self {
        Self {
            queried,
            matches: rank(tally, limit),
            row_hits: tally.hits(Orientation::Rows),
            column_hits: tally.hits(Orientation::Columns),
        }
    }

    /// The ranked words without their counts.
    pub fn words(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.word.clone()).collect()
    }
}

/// Order the tally by descending count and keep at most `limit` entries.
pub fn rank(tally: &Tally, limit: usize) -> Vec<Match> {
    let mut ranked: Vec<(&str, u32)> = tally.iter().collect();
    // Stable: equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count)| Match {
            word: word.to_owned(),
            count,
        })
        .collect()
}
