//! Parse results
//!
//! Read-only view of one parse: which options matched (with their values, in
//! encounter order) and the positional arguments.

use crate::convert;
use crate::error::Result;
use serde::Serialize;
use std::str::FromStr;

/// One matched option and every value given for it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedOption {
    /// Short name of the matched option
    pub name: String,
    /// Values in the order they appeared (empty for flag options)
    pub values: Vec<String>,
}

/// The outcome of a successful parse. Built once, read-only afterward.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    matched: Vec<MatchedOption>,
    positional: Vec<String>,
}

impl ParseResult {
    /// Whether the option with this short name was present on the command line.
    pub fn has(&self, short: &str) -> bool {
        self.matched.iter().any(|m| m.name == short)
    }

    /// First value given for the option, if any.
    pub fn value(&self, short: &str) -> Option<&str> {
        self.values(short)?.first().map(String::as_str)
    }

    /// All values given for the option. `None` if the option was absent.
    pub fn values(&self, short: &str) -> Option<&[String]> {
        self.matched
            .iter()
            .find(|m| m.name == short)
            .map(|m| m.values.as_slice())
    }

    /// Number of values given for the option.
    pub fn value_count(&self, short: &str) -> usize {
        self.values(short).map_or(0, <[String]>::len)
    }

    /// First value for the option, split by `separator`.
    pub fn value_split(&self, short: &str, separator: char) -> Option<Vec<String>> {
        self.value(short)
            .map(|v| v.split(separator).map(str::to_string).collect())
    }

    /// Every value for the option, each split by `separator`.
    pub fn values_split(&self, short: &str, separator: char) -> Vec<Vec<String>> {
        self.values(short)
            .unwrap_or(&[])
            .iter()
            .map(|v| v.split(separator).map(str::to_string).collect())
            .collect()
    }

    /// First value for the option, converted via [`FromStr`].
    ///
    /// Returns `Ok(None)` when the option was absent and an error when the
    /// value does not parse into `T`.
    pub fn parsed<T: FromStr>(&self, short: &str) -> Result<Option<T>> {
        self.value(short).map(convert::convert).transpose()
    }

    /// All values for the option, converted via [`FromStr`].
    pub fn parsed_values<T: FromStr>(&self, short: &str) -> Result<Vec<T>> {
        convert::convert_all(self.values(short).unwrap_or(&[]))
    }

    /// The "naked" arguments not associated with any option name.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Matched options in encounter order.
    pub fn options(&self) -> &[MatchedOption] {
        &self.matched
    }

    /// Whether no options matched.
    pub fn no_options(&self) -> bool {
        self.matched.is_empty()
    }

    /// Whether no positional arguments were given.
    pub fn no_positional(&self) -> bool {
        self.positional.is_empty()
    }

    pub(crate) fn record_option(&mut self, short: &str, value: Option<String>) {
        let index = match self.matched.iter().position(|m| m.name == short) {
            Some(index) => index,
            None => {
                self.matched.push(MatchedOption {
                    name: short.to_string(),
                    values: Vec::new(),
                });
                self.matched.len() - 1
            }
        };

        if let Some(value) = value {
            self.matched[index].values.push(value);
        }
    }

    pub(crate) fn record_positional(&mut self, arg: String) {
        self.positional.push(arg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseResult {
        let mut result = ParseResult::default();
        result.record_option("f", Some("a.txt".to_string()));
        result.record_option("n", Some("3".to_string()));
        result.record_option("f", Some("b.txt".to_string()));
        result.record_option("q", None);
        result.record_positional("input".to_string());
        result
    }

    #[test]
    fn test_value_accessors() {
        let result = sample();
        assert!(result.has("f"));
        assert!(!result.has("x"));
        assert_eq!(result.value("f"), Some("a.txt"));
        assert_eq!(result.values("f").unwrap().len(), 2);
        assert_eq!(result.value_count("f"), 2);
        assert_eq!(result.value_count("q"), 0);
        assert_eq!(result.values("x"), None);
    }

    #[test]
    fn test_encounter_order() {
        let result = sample();
        let names: Vec<&str> = result.options().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["f", "n", "q"]);
    }

    #[test]
    fn test_split_values() {
        let mut result = ParseResult::default();
        result.record_option("t", Some("a,b,c".to_string()));

        assert_eq!(result.value_split("t", ',').unwrap(), ["a", "b", "c"]);
        assert_eq!(result.values_split("t", ','), vec![vec!["a", "b", "c"]]);
        assert!(result.value_split("x", ',').is_none());
        assert!(result.values_split("x", ',').is_empty());
    }

    #[test]
    fn test_typed_conversion() {
        let result = sample();
        assert_eq!(result.parsed::<u32>("n").unwrap(), Some(3));
        assert_eq!(result.parsed::<u32>("x").unwrap(), None);
        assert!(result.parsed::<u32>("f").is_err());
    }

    #[test]
    fn test_positional() {
        let result = sample();
        assert_eq!(result.positional(), ["input"]);
        assert!(!result.no_positional());
        assert!(ParseResult::default().no_positional());
    }
}
