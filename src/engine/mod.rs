//! engine
//!
//! Handler execution: the calling convention, the per-invocation context,
//! and the type dispatcher used by polymorphic commands.
//!
//! # Architecture
//!
//! ```text
//! cli::run -> registry -> Handler::run -> [KindDispatcher] -> ProjectHandler::run -> Bundler
//! ```
//!
//! - [`handler`] - `Handler` and `ProjectHandler` traits
//! - [`dispatch`] - `KindDispatcher`, routing on the config's `type` tag
//! - [`runner`] - Runs a handler to completion and catches panics
//!
//! # Invariants
//!
//! - Exactly one top-level handler runs per invocation
//! - Every handler failure, returned or panicked, surfaces as one `CommandError`

pub mod dispatch;
pub mod handler;
pub mod runner;

pub use dispatch::KindDispatcher;
pub use handler::{Handler, ProjectHandler};
pub use runner::run_handler;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::bundler::Bundler;
use crate::cli::args::InvocationArgs;
use crate::core::config::{ConfigLoader, LoadOptions, ProjectConfig};
use crate::core::error::CommandError;

/// Execution context for handlers.
///
/// Carries the working directory, global settings derived from CLI flags,
/// and the bundler backend that concrete handlers delegate to.
#[derive(Clone)]
pub struct Context {
    /// Project directory; config and entry paths resolve against it.
    pub cwd: PathBuf,
    /// Debug logging enabled.
    pub debug: bool,
    /// Backend that produces bundles and runs the dev server.
    pub bundler: Arc<dyn Bundler>,
}

impl Context {
    /// Create a context rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>, bundler: Arc<dyn Bundler>) -> Self {
        Self {
            cwd: cwd.into(),
            debug: false,
            bundler,
        }
    }

    /// Set the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// A config loader rooted at this context's directory.
    pub fn config_loader(&self) -> ConfigLoader {
        ConfigLoader::new(&self.cwd)
    }

    /// Load the project config named by `--config`, or the default file.
    ///
    /// # Errors
    ///
    /// Missing (when required), unparsable, or invalid config is a user
    /// error, as is `--config` given without a path. An unreadable file is
    /// an internal error.
    pub fn load_config(
        &self,
        args: &InvocationArgs,
        options: LoadOptions,
    ) -> Result<ProjectConfig, CommandError> {
        let explicit = args.parse_option::<String>("config")?;
        self.config_loader()
            .load(explicit.as_deref(), options)
            .map_err(CommandError::from)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("cwd", &self.cwd)
            .field("debug", &self.debug)
            .field("bundler", &self.bundler.name())
            .finish()
    }
}
