// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find candidate words in a square grid of letters.
//!
//! Words are matched left-to-right along rows and top-to-bottom along
//! columns. Each word scores one point for each of the two directions in
//! which it appears at least once, and a search returns the best-scoring
//! words (ten by default).
//!
//! # Architecture
//!
//! The implementation separates immutable grid data from per-search state:
//!
//! ## Built once
//!
//! Computed when a [`WordFinder`] is constructed and never changed:
//! - [`grid::Grid`]: the validated, upper-cased square of letters
//! - its transpose, so vertical runs become horizontal ones
//!
//! Both live in [`grid::GridViews`]. Columns are handled by this single
//! rotation, not by direction-aware scanning.
//!
//! ## Built per search
//!
//! - [`query::QuerySet`]: trimmed, upper-cased, deduplicated words
//! - [`search::Tally`]: insertion-ordered occurrence counts
//!
//! Because searching only reads the grid views, one finder can serve
//! concurrent searches from several threads.
//!
//! # Example
//!
//! ```
//! use word_grid_search::WordFinder;
//!
//! let finder = WordFinder::new(["cat", "ore", "wed"]).unwrap();
//! let matches = finder.find_counts(["cow", "at", "cat", "dog"]);
//!
//! // "COW" runs down the first column; "CAT" and "AT" run along the first row.
//! let words: Vec<&str> = matches.iter().map(|m| m.word.as_str()).collect();
//! assert_eq!(words, ["COW", "AT", "CAT"]);
//! ```

pub mod config;
pub mod error;
pub mod finder;
pub mod grid;
pub mod logging;
pub mod query;
pub mod search;

// Re-export commonly used types
pub use config::FinderConfig;
pub use error::{ConfigError, GridError};
pub use finder::WordFinder;
pub use grid::Orientation;
pub use search::{Match, SearchReport};
