// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated letter grids.
//!
//! This module contains the immutable grid data used by every search:
//! - Grid: a validated, upper-cased square of letters
//! - Orientation: which of the two views a word is matched against
//! - GridViews: the grid and its transpose, built once per finder

pub mod constants;
pub mod orientation;
pub mod views;

pub use constants::*;
pub use orientation::Orientation;
pub use views::GridViews;

use crate::error::GridError;
use log::trace;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A square grid of upper-case letters.
///
/// Every row has exactly as many letters as there are rows, and every
/// character satisfies [`is_letter`]. A `Grid` can only be obtained
/// through [`Grid::normalize`] or [`Grid::transpose`], so these invariants
/// always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Validate and canonicalize raw rows.
    ///
    /// Each row is trimmed of surrounding whitespace and upper-cased before the
    /// shape and character checks. Checks run in this order and the first
    /// failure wins:
    ///
    /// 1. no rows: [`GridError::Empty`]
    /// 2. more than `max_size` rows: [`GridError::SizeExceeded`]
    /// 3. a row whose length differs from the row count: [`GridError::NonSquare`]
    /// 4. a character that is not a letter: [`GridError::InvalidCharacter`]
    ///
    /// Lengths are counted in `char`s after upper-casing, and upper-casing can
    /// lengthen a row: `"ß"` becomes `"SS"`, so `["ß"]` is reported as
    /// non-square (length 2, expected 1) rather than kept as a one-letter row.
    ///
    /// A letter is any character in a Unicode letter category (`Lu`, `Ll`,
    /// `Lt`, `Lm`, `Lo`), both as supplied and after upper-casing. Letter
    /// numbers such as `Ⅻ` and combining marks are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use word_grid_search::grid::{Grid, MAX_GRID_SIZE};
    ///
    /// let grid = Grid::normalize([" ab", "cd "], MAX_GRID_SIZE).unwrap();
    /// assert_eq!(grid.rows(), ["AB", "CD"]);
    /// ```
    pub fn normalize<I, S>(rows: I, max_size: usize) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = rows.into_iter().collect();

        match raw.len() {
            0 => return Err(GridError::Empty),
            n if n > max_size => {
                return Err(GridError::SizeExceeded {
                    rows: n,
                    max: max_size,
                })
            }
            _ => {}
        }

        let trimmed: Vec<&str> = raw.iter().map(|row| row.as_ref().trim()).collect();
        let rows: Vec<String> = trimmed.iter().map(|row| row.to_uppercase()).collect();
        let expected = rows.len();

        if let Some((row, length)) = rows
            .iter()
            .map(|row| row.chars().count())
            .enumerate()
            .find(|&(_, length)| length != expected)
        {
            return Err(GridError::NonSquare {
                row,
                length,
                expected,
            });
        }

        for (row, (supplied, folded)) in trimmed.iter().zip(&rows).enumerate() {
            if let Some((column, character)) =
                first_non_letter(supplied).or_else(|| first_non_letter(folded))
            {
                return Err(GridError::InvalidCharacter {
                    row,
                    column,
                    character,
                });
            }
        }

        trace!("normalized {0}x{0} grid", expected);
        Ok(Self { rows })
    }

    /// Build the column-major view of this grid.
    ///
    /// Entry `i` of the result is character `i` of every row, in row order.
    /// The transpose of a valid grid is itself a valid grid of the same size.
    pub fn transpose(&self) -> Self {
        let size = self.size();
        let mut columns: Vec<String> = (0..size).map(|_| String::with_capacity(size)).collect();

        for row in &self.rows {
            for (column, letter) in row.chars().enumerate() {
                columns[column].push(letter);
            }
        }

        Self { rows: columns }
    }

    /// Number of rows (and letters per row).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Whether `word` is a contiguous substring of at least one row.
    ///
    /// `word` is expected to already be upper-cased.
    pub fn contains(&self, word: &str) -> bool {
        self.rows.iter().any(|row| row.contains(word))
    }
}

/// Whether `c` belongs to one of the Unicode letter categories.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn first_non_letter(row: &str) -> Option<(usize, char)> {
    row.chars().enumerate().find(|&(_, c)| !is_letter(c))
}
