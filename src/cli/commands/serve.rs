//! serve command - Run the dev server for whatever kind of project this is
//!
//! Requires a config file; its `type` selects the handler.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::args::InvocationArgs;
use crate::cli::registry::HandlerExport;
use crate::cli::usage::{ArgumentDoc, CommandUsage};
use crate::core::config::LoadOptions;
use crate::core::error::CommandError;
use crate::engine::{Context, Handler, KindDispatcher};
use crate::targets;

pub const USAGE: CommandUsage = CommandUsage {
    summary: "Start a development server.",
    arguments: &[ArgumentDoc {
        name: "entry",
        required: false,
        description: "entry point (default: src/index.js, or demo/src/index.js for components)",
    }],
    options: super::SERVE_OPTIONS,
};

/// Handler for `rig serve`.
pub struct ServeCommand {
    dispatcher: KindDispatcher,
}

impl ServeCommand {
    pub fn new() -> Self {
        Self {
            dispatcher: targets::serve_dispatcher(),
        }
    }
}

impl Default for ServeCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for ServeCommand {
    async fn run(&self, ctx: &Context, args: &InvocationArgs) -> Result<(), CommandError> {
        let config = ctx.load_config(args, LoadOptions::REQUIRED)?;
        self.dispatcher.dispatch(ctx, &config, args).await
    }
}

pub fn export() -> Result<HandlerExport, CommandError> {
    Ok(HandlerExport::Module {
        default: Some(Arc::new(ServeCommand::new())),
        callable: None,
    })
}
