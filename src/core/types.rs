//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommandName`] - Registry key for a top-level command
//! - [`ProjectKind`] - Closed set of project kinds a config can declare
//!
//! # Examples
//!
//! ```
//! use rig::core::types::{CommandName, ProjectKind};
//!
//! let name = CommandName::new("serve").unwrap();
//! assert_eq!(name.as_str(), "serve");
//! assert!(CommandName::new("").is_err());
//!
//! assert_eq!(ProjectKind::parse("react-app"), Some(ProjectKind::ReactApp));
//! assert_eq!(ProjectKind::parse("React-App"), None);
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid command name: {0}")]
    InvalidCommandName(String),
}

/// A command name as typed on the command line.
///
/// Lookup against the registry is an exact, case-sensitive match. The name is
/// never interpreted as a path or module identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandName(String);

impl CommandName {
    /// Create a new command name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommandName` if the name is empty, starts
    /// with `-`, or contains whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidCommandName(
                "command name cannot be empty".into(),
            ));
        }
        if name.starts_with('-') {
            return Err(TypeError::InvalidCommandName(format!(
                "'{}' cannot start with '-'",
                name
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidCommandName(format!(
                "'{}' cannot contain whitespace",
                name
            )));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of project a config declares.
///
/// Polymorphic commands branch on this tag. The set is closed: adding a kind
/// means every `match` over it stops compiling until a handler is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// A React application.
    ReactApp,
    /// A plain web application without React-specific wiring.
    WebApp,
    /// A reusable React component with a demo app.
    ReactComponent,
}

impl ProjectKind {
    /// All known kinds.
    pub const ALL: &'static [ProjectKind] = &[
        ProjectKind::ReactApp,
        ProjectKind::WebApp,
        ProjectKind::ReactComponent,
    ];

    /// Get the tag used for this kind in config files.
    pub fn tag(&self) -> &'static str {
        match self {
            ProjectKind::ReactApp => "react-app",
            ProjectKind::WebApp => "web-app",
            ProjectKind::ReactComponent => "react-component",
        }
    }

    /// Parse a config tag. Exact match only.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
