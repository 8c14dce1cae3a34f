//! targets::react_component
//!
//! Handlers for reusable React components.
//!
//! Serving runs the component's demo app; building compiles the component
//! itself into `lib/`. The vendor bundle only makes sense for apps, so
//! `--vendor` is ignored here.

use async_trait::async_trait;

use super::options::{self, Defaults};
use crate::cli::args::InvocationArgs;
use crate::core::config::ProjectConfig;
use crate::core::error::CommandError;
use crate::core::types::ProjectKind;
use crate::engine::{Context, ProjectHandler};

pub const DEFAULTS: Defaults = Defaults {
    serve_entry: "demo/src/index.js",
    build_entry: "src/index.js",
    dist_dir: "lib",
    title: "Component Demo",
};

/// Runs the dev server for a component's demo app.
#[derive(Debug, Default)]
pub struct ServeReactDemo;

#[async_trait]
impl ProjectHandler for ServeReactDemo {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let task = options::serve_task(ProjectKind::ReactComponent, &DEFAULTS, config, args)?;
        tracing::info!(%task, "serving component demo");
        ctx.bundler.serve(&task).await?;
        Ok(())
    }
}

/// Builds a React component for publishing.
#[derive(Debug, Default)]
pub struct BuildReactComponent;

#[async_trait]
impl ProjectHandler for BuildReactComponent {
    async fn run(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let mut task =
            options::build_task(ProjectKind::ReactComponent, &DEFAULTS, config, args)?;
        task.vendor = false;
        tracing::info!(%task, "building react component");
        ctx.bundler.build(&task).await?;
        Ok(())
    }
}
