//! bundler
//!
//! Abstraction for the toolchain that builds bundles and runs the dev server.
//!
//! # Architecture
//!
//! The `Bundler` trait is the boundary between deciding what to do (the
//! project handlers in [`crate::targets`]) and doing it. Handlers build a
//! [`BuildTask`] or [`ServeTask`] and hand it over; they never spawn
//! processes themselves.
//!
//! # Modules
//!
//! - `traits`: Core `Bundler` trait and task types
//! - [`webpack`]: webpack CLI implementation
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! # Selection
//!
//! [`create_bundler`] returns a [`webpack::WebpackBundler`] running the
//! program named by `$RIG_WEBPACK`, or `webpack` when unset.

pub mod mock;
mod traits;
pub mod webpack;

pub use traits::*;

use std::path::Path;
use std::sync::Arc;

/// Environment variable naming the webpack executable.
pub const PROGRAM_ENV: &str = "RIG_WEBPACK";

/// Create the bundler for a project directory.
pub fn create_bundler(cwd: &Path) -> Arc<dyn Bundler> {
    let program = program_from(std::env::var(PROGRAM_ENV).ok());
    tracing::debug!(%program, "selected bundler");
    Arc::new(webpack::WebpackBundler::new(program, cwd))
}

fn program_from(configured: Option<String>) -> String {
    configured
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| webpack::DEFAULT_PROGRAM.to_string())
}
