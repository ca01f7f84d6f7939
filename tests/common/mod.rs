// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test fixtures shared across integration tests.

#![allow(dead_code)]

use word_grid_search::WordFinder;

/// Six-by-six sample puzzle.
///
/// Rows: CHILL (row 2), COLD (row 5).
/// Columns: WIND (column 2, "CWINDL"), COLD (column 4, "COLDYY").
pub const SAMPLE_GRID: [&str; 6] = ["abcdca", "fgwiob", "chillc", "pqnsdd", "uvdxye", "coldyf"];

/// Candidate words for [`SAMPLE_GRID`], including a duplicate and a miss.
pub const SAMPLE_WORDS: [&str; 5] = ["cold", "wind", "wind", "snow", "chill"];

pub fn sample_finder() -> WordFinder {
    let _ = env_logger::builder().is_test(true).try_init();
    WordFinder::new(SAMPLE_GRID).expect("sample grid is valid")
}

/// An `n`x`n` grid of letters cycling through the alphabet.
pub fn alphabet_grid(n: usize) -> Vec<String> {
    (0..n)
        .map(|row| {
            (0..n)
                .map(|column| (b'a' + ((row * n + column) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

/// Sorted copy, for assertions that ignore tie order.
pub fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}
