//! targets::react_app
//!
//! Serve and build handlers for React applications.

use async_trait::async_trait;

use super::options::{self, Defaults};
use crate::cli::args::InvocationArgs;
use crate::core::config::ProjectConfig;
use crate::core::error::CommandError;
use crate::core::types::ProjectKind;
use crate::engine::{Context, ProjectHandler};

pub const DEFAULTS: Defaults = Defaults {
    serve_entry: "src/index.js",
    build_entry: "src/index.js",
    dist_dir: "dist",
    title: "React App",
};

/// Runs the dev server for a React app.
#[derive(Debug, Default)]
pub struct ServeReactApp;

#[async_trait]
impl ProjectHandler for ServeReactApp {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let task = options::serve_task(ProjectKind::ReactApp, &DEFAULTS, config, args)?;
        tracing::info!(%task, "serving react app");
        ctx.bundler.serve(&task).await?;
        Ok(())
    }
}

/// Creates a static build of a React app.
#[derive(Debug, Default)]
pub struct BuildReactApp;

#[async_trait]
impl ProjectHandler for BuildReactApp {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let task = options::build_task(ProjectKind::ReactApp, &DEFAULTS, config, args)?;
        tracing::info!(%task, "building react app");
        ctx.bundler.build(&task).await?;
        Ok(())
    }
}
