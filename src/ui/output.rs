//! ui::output
//!
//! Console lines and text styling.
//!
//! # Design
//!
//! Usage and version text go to stdout; errors go to stderr. Styling uses
//! `colored`, which already honors `NO_COLOR` and `CLICOLOR_FORCE`.

use std::fmt;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};

/// Output stream a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Informational output
    Stdout,
    /// Error output
    Stderr,
}

/// A single line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Destination stream
    pub stream: Stream,
    /// Text without the trailing newline
    pub text: String,
}

impl ConsoleLine {
    /// A line for stdout.
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stdout,
            text: text.into(),
        }
    }

    /// A line for stderr.
    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stderr,
            text: text.into(),
        }
    }
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Write lines to their streams, in order.
pub fn emit(lines: &[ConsoleLine]) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    for line in lines {
        match line.stream {
            Stream::Stdout => writeln!(out, "{}", line.text)?,
            Stream::Stderr => {
                out.flush()?;
                writeln!(err, "{}", line.text)?;
            }
        }
    }

    out.flush()?;
    err.flush()
}

/// Style a command name.
pub fn command(text: &str) -> ColoredString {
    text.green()
}

/// Style a required argument.
pub fn required(text: &str) -> ColoredString {
    text.yellow()
}

/// Style an optional argument or option flag.
pub fn optional(text: &str) -> ColoredString {
    text.cyan()
}

/// Style an error message.
pub fn error(text: &str) -> ColoredString {
    text.red()
}
