//! cli::args
//!
//! Command-line argument parsing.
//!
//! # Two passes
//!
//! 1. `clap` parses the global options that may precede the command
//!    (`-c/--config`, `-h/--help`, `-v/--version`, `--debug`) and captures
//!    every remaining token verbatim.
//! 2. [`InvocationArgs`] normalizes those tokens into a command, its
//!    positionals, and a flat option map. Command-specific options are opaque
//!    at this layer, so they are accepted in any position.
//!
//! # Normalization rules
//!
//! - Short aliases collapse to canonical names: `c → config`, `h → help`,
//!   `v → version`
//! - Flags in [`BOOLEAN_FLAGS`] never take a value
//! - `--no-<name>` sets `<name>` to false
//! - Any other flag takes the next token as its value unless that token
//!   starts with `-`, in which case it is recorded as `true`
//! - `--key=value` always assigns `value`
//! - `--` ends option parsing
//!
//! Help and version are not handled by clap. Their exit codes are part of
//! the front controller's contract, see [`crate::cli::run`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use clap::Parser;

use crate::core::error::CommandError;

/// Short flag aliases and the canonical names they collapse to.
pub const ALIASES: &[(char, &str)] = &[('c', "config"), ('h', "help"), ('v', "version")];

/// Flags that never consume the following token.
pub const BOOLEAN_FLAGS: &[&str] = &[
    "help",
    "version",
    "debug",
    "auto-install",
    "fallback",
    "info",
    "reload",
    "vendor",
];

/// Raw global options, as parsed by clap.
#[derive(Parser, Debug)]
#[command(name = "rig")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Config file to use
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Display the help message
    #[arg(short, long)]
    pub help: bool,

    /// Print the version
    #[arg(short, long)]
    pub version: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Command, its arguments, and its options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub rest: Vec<String>,
}

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A flag, set or negated
    Bool(bool),
    /// A string-valued option
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

/// A parsed invocation: command token, positionals, and canonical options.
///
/// Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    command: Option<String>,
    positionals: Vec<String>,
    options: BTreeMap<String, OptionValue>,
}

impl InvocationArgs {
    /// Parse raw arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns the clap error if the leading global options are malformed,
    /// e.g. `-c` with no path.
    pub fn parse<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv = std::iter::once("rig".to_string()).chain(raw.into_iter().map(Into::into));
        let cli = Cli::try_parse_from(argv)?;
        Ok(Self::from_cli(cli))
    }

    /// Build from clap's output, normalizing the trailing tokens.
    pub fn from_cli(cli: Cli) -> Self {
        let mut args = InvocationArgs::default();
        if let Some(config) = cli.config {
            args.set("config", OptionValue::Str(config));
        }
        for (name, set) in [
            ("help", cli.help),
            ("version", cli.version),
            ("debug", cli.debug),
        ] {
            if set {
                args.set(name, OptionValue::Bool(true));
            }
        }
        args.absorb(&cli.rest);
        args
    }

    /// Normalize tokens without the clap pass.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut args = InvocationArgs::default();
        args.absorb(&tokens);
        args
    }

    fn absorb(&mut self, tokens: &[String]) {
        let mut iter = tokens.iter().peekable();

        while let Some(token) = iter.next() {
            if token == "--" {
                for rest in iter.by_ref() {
                    self.push_positional(rest);
                }
                break;
            }

            if let Some(long) = token.strip_prefix("--") {
                if let Some((key, value)) = long.split_once('=') {
                    let key = canonical(key);
                    let value = if is_boolean(&key) {
                        OptionValue::Bool(value != "false")
                    } else {
                        OptionValue::Str(value.to_string())
                    };
                    self.set(&key, value);
                } else if let Some(negated) = long.strip_prefix("no-") {
                    self.set(&canonical(negated), OptionValue::Bool(false));
                } else {
                    let key = canonical(long);
                    let value = take_value(&key, &mut iter);
                    self.set(&key, value);
                }
                continue;
            }

            if token.len() > 1 && token.starts_with('-') {
                let shorts: Vec<char> = token[1..].chars().collect();
                if let Some((last, init)) = shorts.split_last() {
                    for c in init {
                        self.set(&canonical(&c.to_string()), OptionValue::Bool(true));
                    }
                    let key = canonical(&last.to_string());
                    let value = take_value(&key, &mut iter);
                    self.set(&key, value);
                }
                continue;
            }

            self.push_positional(token);
        }
    }

    fn push_positional(&mut self, token: &str) {
        if self.command.is_none() {
            self.command = Some(token.to_string());
        } else {
            self.positionals.push(token.to_string());
        }
    }

    fn set(&mut self, key: &str, value: OptionValue) {
        self.options.insert(key.to_string(), value);
    }

    /// The command token, if one was given.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Positional arguments after the command token.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The positional at `index` (0 = first after the command).
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// The raw value for an option.
    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// All options, sorted by name.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if a flag is set.
    ///
    /// A string-valued option counts as set.
    pub fn flag(&self, name: &str) -> bool {
        match self.options.get(name) {
            Some(OptionValue::Bool(b)) => *b,
            Some(OptionValue::Str(_)) => true,
            None => false,
        }
    }

    /// Get a string option. Flags without a value yield `None`.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Parse a string option into `T`.
    ///
    /// # Errors
    ///
    /// Returns a user error if the option was given without a value or the
    /// value does not parse.
    pub fn parse_option<T>(&self, name: &str) -> Result<Option<T>, CommandError>
    where
        T: FromStr,
    {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Bool(_)) => Err(CommandError::user(format!(
                "rig: --{} requires a value",
                name
            ))),
            Some(OptionValue::Str(s)) => s.parse().map(Some).map_err(|_| {
                CommandError::user(format!("rig: invalid value '{}' for --{}", s, name))
            }),
        }
    }
}

fn canonical(name: &str) -> String {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some((_, long)) = ALIASES.iter().find(|(short, _)| *short == c) {
            return (*long).to_string();
        }
    }
    name.to_string()
}

fn is_boolean(name: &str) -> bool {
    BOOLEAN_FLAGS.contains(&name)
}

fn take_value<'a, I>(key: &str, iter: &mut std::iter::Peekable<I>) -> OptionValue
where
    I: Iterator<Item = &'a String>,
{
    if is_boolean(key) {
        return OptionValue::Bool(true);
    }
    match iter.next_if(|next| !next.starts_with('-')) {
        Some(value) => OptionValue::Str(value.clone()),
        None => OptionValue::Bool(true),
    }
}
