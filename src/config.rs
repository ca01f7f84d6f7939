// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finder configuration.

use crate::error::ConfigError;
use crate::grid::{MAX_GRID_SIZE, RESULT_LIMIT};

/// Tunable limits for a [`WordFinder`](crate::WordFinder).
///
/// The defaults (64 rows, 10 results) suit most callers. `max_grid_size` can
/// be lowered to reject large grids early but never raised above
/// [`MAX_GRID_SIZE`].
///
/// # Example
///
/// ```
/// use word_grid_search::FinderConfig;
///
/// let config = FinderConfig::default().with_result_limit(3);
/// assert!(config.validate().is_ok());
/// assert!(FinderConfig::default().with_result_limit(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    /// Largest accepted number of rows.
    pub max_grid_size: usize,

    /// Maximum number of words returned by a search.
    pub result_limit: usize,
}

impl FinderConfig {
    pub fn new() -> Self {
        Self {
            max_grid_size: MAX_GRID_SIZE,
            result_limit: RESULT_LIMIT,
        }
    }

    pub fn with_max_grid_size(mut self, max_grid_size: usize) -> Self {
        self.max_grid_size = max_grid_size;
        self
    }

    pub fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }

    /// Check that both limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_limit == 0 {
            return Err(ConfigError::ZeroResultLimit);
        }
        if self.max_grid_size == 0 || self.max_grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSizeOutOfRange {
                value: self.max_grid_size,
                limit: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}
