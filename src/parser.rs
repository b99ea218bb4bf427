//! Parse-and-dispatch
//!
//! The [`Parser`] owns the option registry, recognizes the built-in help,
//! version, and log-level options, matches raw arguments against the
//! registry, and dispatches the outcome to the configured listener.

use crate::error::{ParseError, Result};
use crate::help::{self, VersionInfo};
use crate::listener::{CliListener, DefaultListener};
use crate::logging;
use crate::registry::{OptionRegistry, OptionSpec};
use crate::result::ParseResult;

use std::iter::Peekable;
use std::slice::Iter;

/// Short name of the built-in help option
pub const SHORT_OPTION_HELP: &str = "h";
/// Long name of the built-in help option
pub const LONG_OPTION_HELP: &str = "help";
/// Short name of the built-in version option
pub const SHORT_OPTION_VERSION: &str = "v";
/// Long name of the built-in version option
pub const LONG_OPTION_VERSION: &str = "version";
/// Short name of the built-in log-level option
pub const SHORT_OPTION_LOGGING: &str = "l";
/// Long name of the built-in log-level option
pub const LONG_OPTION_LOGGING: &str = "loglevel";

/// Command-line parser with listener-based dispatch.
///
/// Typical usage: create a `Parser` with the command syntax string, configure
/// it with `with_*` methods, call [`parse`](Parser::parse) from `main`, and
/// exit as soon as possible when it returns `false` (help, version, or a
/// parse failure was already printed).
///
/// ```
/// use optkit::{OptionSpec, Parser, version_info};
///
/// let mut parser = Parser::new("myapp <input> [OPTIONS]")
///     .with_version(version_info!())
///     .with_option(OptionSpec::new("f", "file", "Input file").takes_arg())
///     .unwrap();
///
/// if !parser.parse(["-f", "data.txt"]) {
///     // print help/version or a parse error happened; exit here
/// }
/// assert_eq!(parser.value("f"), Some("data.txt"));
/// ```
pub struct Parser {
    syntax: String,
    registry: OptionRegistry,
    listener: Option<Box<dyn CliListener>>,
    version: VersionInfo,
    default_log_level: String,
    help_enabled: bool,
    version_enabled: bool,
    logging_enabled: bool,
    help_on_empty: bool,
    builtins_installed: bool,
    result: Option<ParseResult>,
}

impl Parser {
    /// Create a parser. `syntax` shows how to invoke the application in help
    /// output, e.g. `"myapp <input> [OPTIONS]"`.
    pub fn new(syntax: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            registry: OptionRegistry::new(),
            listener: None,
            version: VersionInfo::default(),
            default_log_level: logging::DEFAULT_LEVEL.to_string(),
            help_enabled: true,
            version_enabled: true,
            logging_enabled: true,
            help_on_empty: false,
            builtins_installed: false,
            result: None,
        }
    }

    /// Register a command-line option. Fails if the short name is taken.
    pub fn with_option(mut self, spec: OptionSpec) -> Result<Self> {
        self.registry.insert(spec)?;
        Ok(self)
    }

    /// Register several command-line options.
    pub fn with_options(mut self, specs: impl IntoIterator<Item = OptionSpec>) -> Result<Self> {
        for spec in specs {
            self.registry.insert(spec)?;
        }
        Ok(self)
    }

    /// Set the handler for parse events.
    pub fn with_listener(mut self, listener: impl CliListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Set the version metadata reported for `-v/--version`.
    pub fn with_version(mut self, version: VersionInfo) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable the built-in `-h/--help` option. Defaults to enabled.
    pub fn with_help_enabled(mut self, enabled: bool) -> Self {
        self.help_enabled = enabled;
        self
    }

    /// Enable or disable the built-in `-v/--version` option. Defaults to
    /// enabled.
    pub fn with_version_enabled(mut self, enabled: bool) -> Self {
        self.version_enabled = enabled;
        self
    }

    /// Enable or disable the built-in `-l/--loglevel` option. Defaults to
    /// enabled.
    pub fn with_logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Set the log level used when `-l` is absent. Defaults to `info`.
    pub fn with_default_log_level(mut self, level: impl Into<String>) -> Self {
        self.default_log_level = level.into();
        self
    }

    /// Print help and stop when the command line has no arguments and no
    /// options. Defaults to false.
    pub fn with_help_on_empty(mut self, enabled: bool) -> Self {
        self.help_on_empty = enabled;
        self
    }

    /// Parse `args` and dispatch the outcome to the listener.
    ///
    /// Returns `true` when parsing succeeded and the application should
    /// continue, `false` when it should exit: help or version was printed, or
    /// parsing failed and the exception hook already reported it.
    pub fn parse<I, S>(&mut self, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        match self.try_parse(&args) {
            Ok(should_continue) => should_continue,
            Err(error) => {
                let mut listener = self.take_listener();
                listener.on_parse_error(&error, self);
                self.listener = Some(listener);
                false
            }
        }
    }

    fn try_parse(&mut self, args: &[String]) -> Result<bool> {
        self.install_builtins()?;

        if self.version_enabled && contains_flag(args, SHORT_OPTION_VERSION, LONG_OPTION_VERSION) {
            self.print_version();
            return Ok(false);
        }

        if self.help_enabled && contains_flag(args, SHORT_OPTION_HELP, LONG_OPTION_HELP) {
            self.print_help();
            return Ok(false);
        }

        let result = self.scan(args)?;

        if self.logging_enabled {
            let level = result
                .value(SHORT_OPTION_LOGGING)
                .unwrap_or(&self.default_log_level);
            logging::init(logging::parse_level(level)?);
        }

        self.result = Some(result);
        self.dispatch()
    }

    /// Register the enabled built-in options, after all user options.
    fn install_builtins(&mut self) -> Result<()> {
        if self.builtins_installed {
            return Ok(());
        }

        if self.version_enabled {
            self.registry.insert(OptionSpec::new(
                SHORT_OPTION_VERSION,
                LONG_OPTION_VERSION,
                "Show version.",
            ))?;
        }

        if self.logging_enabled {
            let description = format!(
                "Log level (default is {}): {}",
                self.default_log_level,
                logging::LEVEL_NAMES.join(", ")
            );
            self.registry.insert(
                OptionSpec::new(SHORT_OPTION_LOGGING, LONG_OPTION_LOGGING, description)
                    .takes_arg(),
            )?;
        }

        if self.help_enabled {
            self.registry.insert(OptionSpec::new(
                SHORT_OPTION_HELP,
                LONG_OPTION_HELP,
                "Show help.",
            ))?;
        }

        self.builtins_installed = true;
        Ok(())
    }

    /// Match raw arguments against the registry.
    fn scan(&self, args: &[String]) -> Result<ParseResult> {
        let mut result = ParseResult::default();
        let mut iter = args.iter().peekable();
        let mut options_done = false;

        while let Some(token) = iter.next() {
            if options_done {
                result.record_positional(token.clone());
            } else if token == "--" {
                options_done = true;
            } else if let Some(rest) = token.strip_prefix("--") {
                let (name, inline) = match rest.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (rest, None),
                };
                let spec = self
                    .registry
                    .find_long(name)
                    .ok_or_else(|| ParseError::UnknownOption(token.clone()))?;
                if inline.is_some() && !spec.takes_arg {
                    return Err(ParseError::UnknownOption(token.clone()));
                }
                record_match(spec, inline, &mut iter, &mut result)?;
            } else if looks_like_option(token) {
                let name = &token[1..];
                let spec = self
                    .registry
                    .find_short(name)
                    .ok_or_else(|| ParseError::UnknownOption(token.clone()))?;
                record_match(spec, None, &mut iter, &mut result)?;
            } else {
                result.record_positional(token.clone());
            }
        }

        let missing: Vec<String> = self
            .registry
            .iter()
            .filter(|spec| spec.required && !result.has(&spec.short))
            .map(|spec| spec.short.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ParseError::MissingRequiredOptions(missing));
        }

        Ok(result)
    }

    /// Invoke listener hooks in fixed order on a successful parse.
    fn dispatch(&mut self) -> Result<bool> {
        let mut listener = self.take_listener();
        let outcome = self.dispatch_hooks(listener.as_mut());
        self.listener = Some(listener);
        outcome
    }

    fn dispatch_hooks(&self, listener: &mut dyn CliListener) -> Result<bool> {
        let result = match self.result.as_ref() {
            Some(result) => result,
            None => return Ok(true),
        };

        if result.no_positional() {
            listener.on_no_arguments(self)?;
        }

        if result.no_options() {
            listener.on_no_options(self)?;
        }

        if result.no_positional() && result.no_options() && self.help_on_empty {
            self.print_help();
            return Ok(false);
        }

        let missing: Vec<OptionSpec> = self
            .registry
            .iter()
            .filter(|spec| !result.has(&spec.short))
            .cloned()
            .collect();
        if !missing.is_empty() {
            listener.on_missing_options(&missing, self)?;
        }

        if !result.no_positional() {
            listener.on_positional_args(result.positional(), self)?;
        }

        for matched in result.options() {
            listener.on_option(&matched.name, &matched.values, self)?;
        }

        Ok(true)
    }

    fn take_listener(&mut self) -> Box<dyn CliListener> {
        self.listener
            .take()
            .unwrap_or_else(|| Box::new(DefaultListener))
    }

    /// Look up a registered option by short name.
    pub fn option(&self, short: &str) -> Option<&OptionSpec> {
        self.registry.find_short(short)
    }

    /// The result of the last successful parse.
    pub fn result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    /// First parsed value for the option with this short name.
    pub fn value(&self, short: &str) -> Option<&str> {
        self.result.as_ref()?.value(short)
    }

    /// All parsed values for the option with this short name.
    pub fn values(&self, short: &str) -> Option<&[String]> {
        self.result.as_ref()?.values(short)
    }

    /// The positional arguments from the last successful parse.
    pub fn positional(&self) -> &[String] {
        self.result.as_ref().map_or(&[], ParseResult::positional)
    }

    /// Render the help text without printing it.
    pub fn render_help(&self) -> String {
        help::render_help(&self.syntax, &self.registry, &self.version)
    }

    /// Print the help text to stdout.
    pub fn print_help(&self) {
        print!("{}", self.render_help());
    }

    /// Render the version line without printing it.
    pub fn render_version(&self) -> String {
        self.version.render()
    }

    /// Print the version line to stdout.
    pub fn print_version(&self) {
        println!("{}", self.render_version());
    }
}

/// Literal scan for the help/version flags ahead of the full parse.
fn contains_flag(args: &[String], short: &str, long: &str) -> bool {
    let short = format!("-{short}");
    let long = format!("--{long}");
    args.iter().any(|arg| *arg == short || *arg == long)
}

/// A bare `-` stays positional (stdin convention); anything longer that
/// starts with `-` is treated as an option name.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

fn record_match(
    spec: &OptionSpec,
    inline: Option<String>,
    iter: &mut Peekable<Iter<'_, String>>,
    result: &mut ParseResult,
) -> Result<()> {
    if !spec.takes_arg {
        result.record_option(&spec.short, None);
        return Ok(());
    }

    let value = match inline {
        Some(value) => value,
        None => {
            let next_is_value =
                matches!(iter.peek(), Some(next) if !looks_like_option(next) && *next != "--");
            if !next_is_value {
                return Err(ParseError::MissingValue(spec.short.clone()));
            }
            iter.next().cloned().unwrap_or_default()
        }
    };

    result.record_option(&spec.short, Some(value));
    Ok(())
}
