//! cli::registry
//!
//! Maps command names to lazily loaded handlers.
//!
//! # Design
//!
//! An entry holds a locator, not a handler. The locator runs on the first
//! [`CommandRegistry::resolve`] for that name, so a command's implementation
//! is only constructed when that command is selected. A locator may hand back
//! either shape of [`HandlerExport`]; the registry normalizes both.
//!
//! # Invariants
//!
//! - Names are unique; lookup is exact and case-sensitive
//! - A registered name whose locator fails, or exports nothing callable, is
//!   an internal error, never a user error
//! - The table is read-only once built

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::usage::CommandUsage;
use crate::core::error::CommandError;
use crate::core::types::{CommandName, TypeError};
use crate::engine::Handler;

/// What a handler locator produces.
pub enum HandlerExport {
    /// The handler itself.
    Direct(Arc<dyn Handler>),
    /// A module exposing a default handler, a bare callable, or both.
    Module {
        default: Option<Arc<dyn Handler>>,
        callable: Option<Arc<dyn Handler>>,
    },
}

impl HandlerExport {
    /// Normalize to a single handler, preferring the module default.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a module exports nothing callable.
    pub fn into_handler(self) -> Result<Arc<dyn Handler>, CommandError> {
        match self {
            HandlerExport::Direct(handler) => Ok(handler),
            HandlerExport::Module {
                default: Some(handler),
                ..
            } => Ok(handler),
            HandlerExport::Module {
                default: None,
                callable: Some(handler),
            } => Ok(handler),
            HandlerExport::Module {
                default: None,
                callable: None,
            } => Err(CommandError::internal(
                "handler module exports neither a default nor a callable",
            )),
        }
    }
}

/// Lazily produces a command's handler.
pub type Locator = Box<dyn Fn() -> Result<HandlerExport, CommandError> + Send + Sync>;

/// A registered command.
pub struct CommandEntry {
    name: CommandName,
    usage: &'static CommandUsage,
    locator: Locator,
}

impl CommandEntry {
    pub fn name(&self) -> &CommandName {
        &self.name
    }

    pub fn usage(&self) -> &'static CommandUsage {
        self.usage
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("summary", &self.usage.summary)
            .finish_non_exhaustive()
    }
}

/// Errors building the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidName(#[from] TypeError),

    #[error("command '{0}' is registered twice")]
    Duplicate(String),
}

/// Errors resolving a command.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No command by that name.
    #[error("unknown command: {0}")]
    NotFound(String),

    /// The command exists but its handler could not be loaded.
    #[error("failed to load command '{name}': {source}")]
    Load {
        name: String,
        #[source]
        source: CommandError,
    },
}

impl From<ResolveError> for CommandError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(name) => {
                CommandError::user(format!("rig: unknown command: {}", name))
            }
            ResolveError::Load { name, source } => {
                let trace = match source.trace() {
                    Some(inner) => format!("{}\n{}", source.message(), inner),
                    None => source.message().to_string(),
                };
                CommandError::internal(format!("failed to load command '{}'", name))
                    .with_trace(trace)
            }
        }
    }
}

/// The command table.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// Fails on an invalid or already-registered name.
    pub fn register<F>(
        &mut self,
        name: &str,
        usage: &'static CommandUsage,
        locator: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Result<HandlerExport, CommandError> + Send + Sync + 'static,
    {
        let name = CommandName::new(name)?;
        if self.contains(name.as_str()) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.entries.push(CommandEntry {
            name,
            usage,
            locator: Box::new(locator),
        });
        Ok(())
    }

    /// Check if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    fn entry(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name.as_str() == name)
    }

    /// Resolve `name` to its handler, running its locator.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Handler>, ResolveError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;

        tracing::debug!(command = name, "loading handler");
        (entry.locator)()
            .and_then(HandlerExport::into_handler)
            .map_err(|source| ResolveError::Load {
                name: name.to_string(),
                source,
            })
    }
}
