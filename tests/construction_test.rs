// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Construction tests: every valid size builds, every error kind is reported
//! for its condition and in the documented order.

mod common;

use common::alphabet_grid;
use word_grid_search::grid::MAX_GRID_SIZE;
use word_grid_search::{FinderConfig, GridError, WordFinder};

#[test]
fn test_every_valid_size_constructs() {
    for n in 1..=MAX_GRID_SIZE {
        let finder = WordFinder::new(alphabet_grid(n))
            .unwrap_or_else(|e| panic!("{n}x{n} grid rejected: {e}"));
        assert_eq!(finder.size(), n);
        assert!(finder.find(Vec::<String>::new()).is_empty());
    }
}

#[test]
fn test_empty_input() {
    let rows: Vec<String> = Vec::new();
    assert_eq!(WordFinder::new(rows).unwrap_err(), GridError::Empty);
}

#[test]
fn test_65_rows_exceed_bound() {
    let err = WordFinder::new(alphabet_grid(65)).unwrap_err();
    assert_eq!(err, GridError::SizeExceeded { rows: 65, max: 64 });
}

#[test]
fn test_size_reported_even_when_rows_are_garbage() {
    let rows = vec!["1"; 70];
    assert!(matches!(
        WordFinder::new(rows),
        Err(GridError::SizeExceeded { rows: 70, .. })
    ));
}

#[test]
fn test_non_square() {
    let err = WordFinder::new(["abc", "def"]).unwrap_err();
    assert_eq!(
        err,
        GridError::NonSquare {
            row: 0,
            length: 3,
            expected: 2
        }
    );

    let err = WordFinder::new(["abc", "de", "fgh"]).unwrap_err();
    assert!(matches!(err, GridError::NonSquare { row: 1, length: 2, expected: 3 }));
}

#[test]
fn test_length_is_measured_after_trimming() {
    let finder = WordFinder::new(["  ab  ", "\tcd"]).unwrap();
    assert_eq!(finder.size(), 2);
}

#[test]
fn test_non_letters_rejected() {
    // Letter number (U+216B) and combining mark (U+0345) are not letters.
    for bad in ["ab1", "a.c", "a c", "ab_", "a\u{216B}b", "a\u{0345}b"] {
        let rows = ["xyz", bad, "uvw"];
        let err = WordFinder::new(rows).unwrap_err();
        assert!(
            matches!(err, GridError::InvalidCharacter { row: 1, .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn test_non_square_reported_before_bad_characters() {
    let err = WordFinder::new(["a1", "b2", "c3"]).unwrap_err();
    assert!(matches!(err, GridError::NonSquare { .. }));
}

#[test]
fn test_errors_display() {
    let err = WordFinder::new(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err.to_string(), "grid must not be empty");

    let err = WordFinder::new(alphabet_grid(65)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "grid has 65 rows, size must be less or equal to 64"
    );
}

#[test]
fn test_configured_bound() {
    let config = FinderConfig::default().with_max_grid_size(8);
    assert!(WordFinder::with_config(alphabet_grid(8), config).is_ok());
    assert_eq!(
        WordFinder::with_config(alphabet_grid(9), config).unwrap_err(),
        GridError::SizeExceeded { rows: 9, max: 8 }
    );
}

#[test]
fn test_config_above_hard_bound_rejected() {
    let config = FinderConfig::default().with_max_grid_size(100);
    let err = WordFinder::with_config(alphabet_grid(4), config).unwrap_err();
    assert!(matches!(err, GridError::Config(_)));
}
