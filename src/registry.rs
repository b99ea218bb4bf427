//! Option registry
//!
//! Declares command-line options and keeps them in registration order for
//! help rendering and missing-option detection.

use crate::error::{ParseError, Result};
use serde::Serialize;
use std::fmt;

/// A declared command-line option.
///
/// Immutable once registered. Built with `with_*` chaining:
///
/// ```
/// use optkit::OptionSpec;
///
/// let spec = OptionSpec::new("f", "file", "Input file to process")
///     .takes_arg()
///     .required();
/// assert!(spec.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Short name, matched as `-name`
    pub short: String,
    /// Long name, matched as `--name`
    pub long: String,
    /// Whether the option consumes a value from the command line
    pub takes_arg: bool,
    /// Description shown in help output
    pub description: String,
    /// Whether parsing fails when the option is absent
    pub required: bool,
}

impl OptionSpec {
    /// Create a flag option (no argument, not required).
    pub fn new(
        short: impl Into<String>,
        long: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
            takes_arg: false,
            description: description.into(),
            required: false,
        }
    }

    /// Mark the option as consuming a value.
    pub fn takes_arg(mut self) -> Self {
        self.takes_arg = true;
        self
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{},--{}", self.short, self.long)
    }
}

/// Ordered set of declared options, keyed by short name.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    specs: Vec<OptionSpec>,
}

impl OptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option. Fails if the short name is already taken.
    pub fn insert(&mut self, spec: OptionSpec) -> Result<()> {
        if self.find_short(&spec.short).is_some() {
            return Err(ParseError::DuplicateOption(spec.short));
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Look up an option by short name.
    pub fn find_short(&self, short: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|s| s.short == short)
    }

    /// Look up an option by long name.
    pub fn find_long(&self, long: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|s| s.long == long)
    }

    /// Iterate all options in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter()
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no options are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
