//! Console logging configuration
//!
//! Wires the `-l/--loglevel` option value into env_logger with timestamped
//! console output.

use crate::error::{ParseError, Result};
use log::LevelFilter;

/// Level names accepted by the log-level option, listed in help output.
pub const LEVEL_NAMES: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Level used when the log-level option is absent and no default was set.
pub const DEFAULT_LEVEL: &str = "info";

/// Parse a level name (case-insensitive) into a [`LevelFilter`].
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidLogLevel(value.to_string()))
}

/// Initialize timestamped console logging at `level`.
///
/// Repeated calls are harmless; only the first initialization in a process
/// takes effect.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .try_init();

    log::debug!("Logging initialized at level: {level}");
}
