//! optkit - command-line option parsing convenience layer
//!
//! Register options, parse `argv`, print auto-generated help/version text,
//! and dispatch parse results to a listener. Typical usage:
//!
//! 1. Create a [`Parser`] with the command syntax string
//! 2. Configure it with the `with_*` methods
//! 3. Call [`Parser::parse`] from `main`
//! 4. Exit as soon as possible when it returns `false`; otherwise read
//!    parsed values from the parser or react to [`CliListener`] hooks
//!
//! # Modules
//!
//! - [`registry`]: Option declarations and the ordered registry
//! - [`parser`]: Parse-and-dispatch control flow
//! - [`result`]: Read-only parse results
//! - [`listener`]: Listener hooks for parse events
//! - [`help`]: Help and version rendering
//! - [`logging`]: Console logging configuration
//! - [`convert`]: Value conversion and JSON helpers
//! - [`error`]: Error types

pub mod convert;
pub mod error;
pub mod help;
pub mod listener;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod result;

pub use error::{ParseError, Result};
pub use help::VersionInfo;
pub use listener::{CliListener, DefaultListener};
pub use parser::Parser;
pub use registry::{OptionRegistry, OptionSpec};
pub use result::{MatchedOption, ParseResult};
