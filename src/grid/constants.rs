// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Size bounds shared by construction and search.

/// Largest supported grid dimension.
///
/// A grid may have at most this many rows, and since grids are square, at
/// most this many letters per row. Transposing the largest grid reads
/// 64 × 64 = 4096 characters.
pub const MAX_GRID_SIZE: usize = 64;

/// Number of words returned by a search unless configured otherwise.
pub const RESULT_LIMIT: usize = 10;
