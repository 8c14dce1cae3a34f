//! run command - Quick-serve a React app from a single entry module
//!
//! Needs no config file. If one is present (or named with `--config`) its
//! settings still apply.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::args::InvocationArgs;
use crate::cli::registry::HandlerExport;
use crate::cli::usage::{ArgumentDoc, CommandUsage};
use crate::core::config::LoadOptions;
use crate::core::error::CommandError;
use crate::engine::{Context, Handler, ProjectHandler};
use crate::targets::react_app::ServeReactApp;

pub const USAGE: CommandUsage = CommandUsage {
    summary: "Serve a React app for quick development.",
    arguments: &[ArgumentDoc {
        name: "entry",
        required: true,
        description: "entry point for the app",
    }],
    options: super::SERVE_OPTIONS,
};

/// Handler for `rig run`.
#[derive(Debug, Default)]
pub struct RunCommand;

#[async_trait]
impl Handler for RunCommand {
    async fn run(&self, ctx: &Context, args: &InvocationArgs) -> Result<(), CommandError> {
        if args.positional(0).is_none() {
            return Err(CommandError::user(
                "rig: an entry module must be specified",
            ));
        }
        let config = ctx.load_config(args, LoadOptions::OPTIONAL)?;
        ServeReactApp.run(ctx, &config, args).await
    }
}

pub fn export() -> Result<HandlerExport, CommandError> {
    Ok(HandlerExport::Direct(Arc::new(RunCommand)))
}
