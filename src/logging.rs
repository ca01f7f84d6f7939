// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logging setup for the `wordgrid` binary.
//!
//! The library itself only uses the `log` facade; installing a logger is left
//! to the caller.

use log::{debug, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` once.
///
/// `level` is the default for this crate; `RUST_LOG` still overrides it.
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module("word_grid_search", level)
            .filter_module("wordgrid", level)
            .parse_default_env()
            .format_timestamp(None)
            .format_target(false)
            .init();

        debug!("Logging initialized at {}", level);
    });
}
