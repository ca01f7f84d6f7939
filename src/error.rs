// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid construction.
//!
//! Only construction can fail. Searching never errors: malformed query words
//! are filtered out instead.

use thiserror::Error;

/// Errors that can occur while building a [`WordFinder`](crate::WordFinder).
///
/// Validation runs in a fixed order (empty, size, square, characters) and the
/// first failure is reported, so the error for a given input is deterministic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows were supplied.
    #[error("grid must not be empty")]
    Empty,

    /// More rows than the configured bound.
    #[error("grid has {rows} rows, size must be less or equal to {max}")]
    SizeExceeded { rows: usize, max: usize },

    /// A row (after trimming) is not as long as the grid is tall.
    #[error("grid must be square: row {row} has {length} letters, expected {expected}")]
    NonSquare {
        row: usize,
        length: usize,
        expected: usize,
    },

    /// A character that is not a letter.
    #[error("grid must contain only letters: found {character:?} at row {row}, column {column}")]
    InvalidCharacter {
        row: usize,
        column: usize,
        character: char,
    },

    /// The supplied configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors reported by [`FinderConfig::validate`](crate::FinderConfig::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("result limit must be at least 1")]
    ZeroResultLimit,

    #[error("maximum grid size must be between 1 and {limit}, got {value}")]
    GridSizeOutOfRange { value: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_position() {
        let err = GridError::InvalidCharacter {
            row: 2,
            column: 4,
            character: '7',
        };
        assert_eq!(
            err.to_string(),
            "grid must contain only letters: found '7' at row 2, column 4"
        );

        let err = GridError::NonSquare {
            row: 1,
            length: 5,
            expected: 6,
        };
        assert_eq!(
            err.to_string(),
            "grid must be square: row 1 has 5 letters, expected 6"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: GridError = ConfigError::ZeroResultLimit.into();
        assert_eq!(err, GridError::Config(ConfigError::ZeroResultLimit));
        assert_eq!(
            err.to_string(),
            "invalid configuration: result limit must be at least 1"
        );
    }
}
