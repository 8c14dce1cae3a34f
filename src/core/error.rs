//! core::error
//!
//! The two-kind error taxonomy every command reports through.
//!
//! # Design
//!
//! A [`CommandError::User`] is something the operator caused and can fix:
//! a missing config file, an unknown project type, a bad flag value. It is
//! reported as its message alone.
//!
//! Anything else is a [`CommandError::Internal`]: a tool bug or an
//! environment failure nobody anticipated. It is reported with a generic
//! banner followed by its diagnostic trace, when one is attached.
//!
//! # Example
//!
//! ```
//! use rig::core::error::{CommandError, ErrorKind};
//!
//! let err = CommandError::user("rig: couldn't find a config file");
//! assert_eq!(err.kind(), ErrorKind::User);
//!
//! let err = CommandError::from(anyhow::anyhow!("socket closed"));
//! assert_eq!(err.kind(), ErrorKind::Internal);
//! assert!(err.trace().unwrap().contains("socket closed"));
//! ```

use thiserror::Error;

/// Discriminant the error reporter switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operator-fixable; reported without a trace.
    User,
    /// Everything else; reported with a trace when available.
    Internal,
}

/// A failure surfaced by a command handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Operator or project state is wrong.
    ///
    /// A trace may be attached for logging, but it is never shown to the user.
    #[error("{message}")]
    User {
        /// Human-readable message.
        message: String,
        /// Diagnostic trace (not reported).
        trace: Option<String>,
    },

    /// The tool or its environment failed unexpectedly.
    #[error("{message}")]
    Internal {
        /// Short description of the failure.
        message: String,
        /// Diagnostic trace, such as an error chain or panic payload.
        trace: Option<String>,
    },
}

impl CommandError {
    /// Create a user error with no trace.
    pub fn user(message: impl Into<String>) -> Self {
        CommandError::User {
            message: message.into(),
            trace: None,
        }
    }

    /// Create an internal error with no trace.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::Internal {
            message: message.into(),
            trace: None,
        }
    }

    /// Attach a diagnostic trace.
    pub fn with_trace(self, trace: impl Into<String>) -> Self {
        let trace = Some(trace.into());
        match self {
            CommandError::User { message, .. } => CommandError::User { message, trace },
            CommandError::Internal { message, .. } => CommandError::Internal { message, trace },
        }
    }

    /// Which side of the taxonomy this error falls on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::User { .. } => ErrorKind::User,
            CommandError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        match self {
            CommandError::User { message, .. } | CommandError::Internal { message, .. } => message,
        }
    }

    /// The attached diagnostic trace, if any.
    pub fn trace(&self) -> Option<&str> {
        match self {
            CommandError::User { trace, .. } | CommandError::Internal { trace, .. } => {
                trace.as_deref()
            }
        }
    }

    /// Check if this error is operator-fixable.
    pub fn is_user(&self) -> bool {
        self.kind() == ErrorKind::User
    }
}

/// Unclassified failures are internal; the `Debug` rendering of an
/// `anyhow::Error` (message plus cause chain) becomes the trace.
impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        CommandError::Internal {
            message: err.to_string(),
            trace: Some(format!("{:?}", err)),
        }
    }
}
