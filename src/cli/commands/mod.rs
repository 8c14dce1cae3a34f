//! cli::commands
//!
//! Command handlers and the default registry.
//!
//! # Architecture
//!
//! Each command module exposes:
//! 1. `USAGE` - its help entry
//! 2. `export()` - the locator the registry calls when the command is selected
//!
//! `run` exports its handler directly; `serve` and `build` export a module
//! with a default handler. The registry accepts both.

mod build;
mod run;
mod serve;

pub use build::BuildCommand;
pub use run::RunCommand;
pub use serve::ServeCommand;

use super::registry::{CommandRegistry, RegistryError};
use super::usage::OptionDoc;

/// Options shared by `run` and `serve`.
pub(crate) const SERVE_OPTIONS: &[OptionDoc] = &[
    OptionDoc {
        flag: "--auto-install",
        description: "install missing npm dependencies on the fly",
    },
    OptionDoc {
        flag: "--fallback",
        description: "serve the index page from any path",
    },
    OptionDoc {
        flag: "--host",
        description: "hostname to bind the dev server to (default: localhost)",
    },
    OptionDoc {
        flag: "--info",
        description: "show module info",
    },
    OptionDoc {
        flag: "--mount-id",
        description: "id for the <div> the app renders into (default: app)",
    },
    OptionDoc {
        flag: "--port",
        description: "port to run the dev server on (default: 3000)",
    },
    OptionDoc {
        flag: "--reload",
        description: "auto-reload the page if hot reloading fails",
    },
    OptionDoc {
        flag: "--title",
        description: "contents for <title>",
    },
];

/// Build the registry of every command.
///
/// # Errors
///
/// Fails only if a command name is invalid or registered twice.
pub fn registry() -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    registry.register("run", &run::USAGE, run::export)?;
    registry.register("build", &build::USAGE, build::export)?;
    registry.register("serve", &serve::USAGE, serve::export)?;
    Ok(registry)
}
