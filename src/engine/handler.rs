//! engine::handler
//!
//! The calling convention every command implementation follows.
//!
//! # Contract
//!
//! A handler is invoked once and completes once: its future resolves to
//! `Ok(())` on success or to exactly one [`CommandError`]. There is no
//! separate "synchronous" failure path. An `Err` returned before the first
//! `.await` and one returned after it are indistinguishable to the caller,
//! and a panic is caught by the runner and reported as an internal error.
//!
//! A handler may run for as long as it needs (a dev server runs until it is
//! stopped). The runner awaits it; there is no cancellation at this layer.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use rig::cli::args::InvocationArgs;
//! use rig::core::error::CommandError;
//! use rig::engine::{Context, Handler};
//!
//! struct Greet;
//!
//! #[async_trait]
//! impl Handler for Greet {
//!     async fn run(&self, _ctx: &Context, args: &InvocationArgs) -> Result<(), CommandError> {
//!         match args.positional(0) {
//!             Some(name) => {
//!                 println!("hello {}", name);
//!                 Ok(())
//!             }
//!             None => Err(CommandError::user("greet: a name is required")),
//!         }
//!     }
//! }
//! ```

use async_trait::async_trait;

use super::Context;
use crate::cli::args::InvocationArgs;
use crate::core::config::ProjectConfig;
use crate::core::error::CommandError;

/// A top-level command implementation.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Run the command to completion.
    async fn run(&self, ctx: &Context, args: &InvocationArgs) -> Result<(), CommandError>;
}

/// A kind-specific implementation behind a polymorphic command.
///
/// Receives the already-loaded config so the kind tag and the fields the
/// handler reads come from the same load.
#[async_trait]
pub trait ProjectHandler: Send + Sync {
    /// Run against a project of this handler's kind.
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError>;
}
