// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The word finder: construction once, searching many times.
//!
//! Construction validates the grid and builds both views. Each search then
//! prepares its own query set and tally, so a finder is never mutated after
//! construction and can be shared between threads.

use crate::config::FinderConfig;
use crate::error::GridError;
use crate::grid::{Grid, GridViews};
use crate::query::QuerySet;
use crate::search::{Match, SearchReport, Tally};
use log::debug;

/// Finds candidate words in a square letter grid.
///
/// # Example
///
/// ```
/// use word_grid_search::WordFinder;
///
/// let finder = WordFinder::new([
///     "abcdca", "fgwiob", "chillc", "pqnsdd", "uvdxye", "coldyf",
/// ])
/// .unwrap();
///
/// // "WIND" runs down the third column, "COLD" along a row and down a column.
/// let found = finder.find(["cold", "wind", "wind", "snow", "chill"]);
/// assert_eq!(found, ["COLD", "WIND", "CHILL"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordFinder {
    views: GridViews,
    config: FinderConfig,
}

impl WordFinder {
    /// Build a finder with the default limits.
    ///
    /// Fails if the grid is empty, larger than 64 rows, not square, or
    /// contains anything other than letters (checked in that order).
    pub fn new<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(rows, FinderConfig::default())
    }

    /// Build a finder with custom limits.
    pub fn with_config<I, S>(rows: I, config: FinderConfig) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let grid = Grid::normalize(rows, config.max_grid_size)?;
        let views = GridViews::new(grid);
        debug!(
            "[WordFinder] Ready ({0}x{0} grid, top {1} results)",
            views.size(),
            config.result_limit
        );
        Ok(Self { views, config })
    }

    /// Return the most frequently found words, best first.
    ///
    /// Words are trimmed and matched case-insensitively; blank words and
    /// duplicates are ignored. Returned words are upper-case.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.report(words).words()
    }

    /// Like [`find`](Self::find), but keeps each word's count.
    pub fn find_counts<I, S>(&self, words: I) -> Vec<Match>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.report(words).matches
    }

    /// Run a search and return the ranked matches with statistics.
    pub fn report<I, S>(&self, words: I) -> SearchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query = QuerySet::prepare(words);
        if query.is_empty() {
            debug!("[WordFinder] Nothing to search for");
            return SearchReport::empty();
        }

        let tally = Tally::accumulate(&self.views, &query);
        let report = SearchReport::from_tally(query.len(), &tally, self.config.result_limit);
        debug!(
            "[WordFinder] {} of {} words found ({} in rows, {} in columns), returning {}",
            tally.len(),
            query.len(),
            report.row_hits,
            report.column_hits,
            report.matches.len()
        );
        report
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.views.size()
    }

    pub fn views(&self) -> &GridViews {
        &self.views
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }
}
