//! targets::web_app
//!
//! Serve and build handlers for plain web applications.

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
    title: "Web App",
};

/// Runs the dev server for a web app.
#[derive(Debug, Default)]
pub struct ServeWebApp;

#[async_trait]
impl ProjectHandler for ServeWebApp {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let task = options::serve_task(ProjectKind::WebApp, &DEFAULTS, config, args)?;
        tracing::info!(%task, "serving web app");
        ctx.bundler.serve(&task).await?;
        Ok(())
    }
}

/// Creates a static build of a web app.
#[derive(Debug, Default)]
pub struct BuildWebApp;

#[async_trait]
impl ProjectHandler for BuildWebApp {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let task = options::build_task(ProjectKind::WebApp, &DEFAULTS, config, args)?;
        tracing::info!(%task, "building web app");
        ctx.bundler.build(&task).await?;
        Ok(())
    }
}
