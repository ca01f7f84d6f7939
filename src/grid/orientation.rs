// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two directions in which a word can run through the grid.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// A view of the grid.
///
/// Words are only ever matched left-to-right along the rows of a view. A
/// vertical run in the original grid is a horizontal run in its transpose,
/// so two views cover both directions.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is `Rows` then `Columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Orientation {
    /// The grid as supplied: horizontal runs.
    #[strum(serialize = "rows")]
    Rows,

    /// The transposed grid: vertical runs.
    #[strum(serialize = "columns")]
    Columns,
}

impl Orientation {
    /// Slot of this orientation in per-orientation counter arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}
