//! Error types for optkit
//!
//! Everything that can go wrong while registering or parsing options is a
//! [`ParseError`]. Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Parse failure, the single error kind of the crate.
///
/// All variants are recovered locally: [`crate::Parser::parse`] routes them to
/// the listener's exception hook and returns a stop signal instead of
/// propagating a fatal error.
#[derive(Error, Debug)]
pub enum ParseError {
    /// An argument that looks like an option but matches no registered name
    #[error("Unrecognized option: {0}")]
    UnknownOption(String),

    /// An argument-taking option was given without a value
    #[error("Missing argument for option: -{0}")]
    MissingValue(String),

    /// One or more required options were absent from the command line
    #[error("Missing required options: {}", .0.join(", "))]
    MissingRequiredOptions(Vec<String>),

    /// An option with this short name is already registered
    #[error("Option already registered: -{0}")]
    DuplicateOption(String),

    /// A parsed value could not be converted to the requested type
    #[error("Could not parse [{value}] into {target}")]
    InvalidValue { value: String, target: String },

    /// The log-level option value is not a known level name
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Free-form failure raised by a listener hook
    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    /// Build a free-form error, for use inside listener hooks.
    pub fn custom(message: impl Into<String>) -> Self {
        ParseError::Custom(message.into())
    }
}

/// Result type alias using ParseError
pub type Result<T> = std::result::Result<T, ParseError>;
