//! Listener hooks for parse events
//!
//! Implement [`CliListener`] and override only the hooks you need; every
//! method has a default body. Hooks may return an error, which is routed to
//! [`CliListener::on_parse_error`] like any other parse failure.

use crate::error::{ParseError, Result};
use crate::parser::Parser;
use crate::registry::OptionSpec;

/// Callback hooks invoked while command-line arguments are parsed.
pub trait CliListener {
    /// Called once when no positional ("naked") arguments were found.
    fn on_no_arguments(&mut self, _parser: &Parser) -> Result<()> {
        Ok(())
    }

    /// Called once when no options were found on the command line.
    fn on_no_options(&mut self, _parser: &Parser) -> Result<()> {
        Ok(())
    }

    /// Called once with every registered option that was absent from the
    /// command line.
    fn on_missing_options(&mut self, _missing: &[OptionSpec], _parser: &Parser) -> Result<()> {
        Ok(())
    }

    /// Called once with the positional arguments, when there are any.
    fn on_positional_args(&mut self, _args: &[String], _parser: &Parser) -> Result<()> {
        Ok(())
    }

    /// Called once per matched option, in encounter order, with all values
    /// given for that option.
    fn on_option(&mut self, _name: &str, _values: &[String], _parser: &Parser) -> Result<()> {
        Ok(())
    }

    /// Called when parsing fails. The default prints the help text to stdout
    /// and a one-line failure message to stderr.
    fn on_parse_error(&mut self, error: &ParseError, parser: &Parser) {
        parser.print_help();
        eprintln!("Command line parsing failed: {error}");
    }
}

/// Listener used when none is configured. Every hook keeps its default body.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultListener;

impl CliListener for DefaultListener {}
