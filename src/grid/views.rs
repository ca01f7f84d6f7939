// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed grid views.

use super::{Grid, Orientation};
use log::debug;
use strum::IntoEnumIterator;

/// The grid together with its transpose.
///
/// Built once when a finder is constructed and never changed afterwards.
/// Searching only reads from it, so one `GridViews` can serve any number of
/// concurrent searches.
///
/// # Example
///
/// ```
/// use word_grid_search::grid::{Grid, GridViews, Orientation, MAX_GRID_SIZE};
///
/// let grid = Grid::normalize(["ab", "cd"], MAX_GRID_SIZE).unwrap();
/// let views = GridViews::new(grid);
/// assert_eq!(views.view(Orientation::Columns).rows(), ["AC", "BD"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViews {
    rows: Grid,
    columns: Grid,
}

impl GridViews {
    pub fn new(grid: Grid) -> Self {
        let columns = grid.transpose();
        debug!(
            "[GridViews] Built row and column views ({0}x{0})",
            grid.size()
        );
        Self {
            rows: grid,
            columns,
        }
    }

    /// The grid as seen from `orientation`.
    pub fn view(&self, orientation: Orientation) -> &Grid {
        match orientation {
            Orientation::Rows => &self.rows,
            Orientation::Columns => &self.columns,
        }
    }

    /// Every view, rows first.
    pub fn iter(&self) -> impl Iterator<Item = (Orientation, &Grid)> + '_ {
        Orientation::iter().map(move |orientation| (orientation, self.view(orientation)))
    }

    pub fn size(&self) -> usize {
        self.rows.size()
    }
}
