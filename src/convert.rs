//! Value conversion and JSON helpers
//!
//! Typed conversion of parsed option values plus small serde_json wrappers
//! for dumping structures to the console.

use crate::error::{ParseError, Result};
use serde::Serialize;
use std::any::type_name;
use std::str::FromStr;

/// Convert a single parsed value into `T` via [`FromStr`].
pub fn convert<T: FromStr>(value: &str) -> Result<T> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        value: value.to_string(),
        target: type_name::<T>().to_string(),
    })
}

/// Convert every value in `values` into `T` via [`FromStr`].
pub fn convert_all<T: FromStr>(values: &[String]) -> Result<Vec<T>> {
    values.iter().map(|v| convert(v)).collect()
}

/// Pretty-print any serializable value as a JSON string.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a pretty JSON rendering of `value` to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json_string(value)?);
    Ok(())
}
