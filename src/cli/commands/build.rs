//! build command - Create a static build for whatever kind of project this is
//!
//! Requires a config file; its `type` selects the handler.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::args::InvocationArgs;
use crate::cli::registry::HandlerExport;
use crate::cli::usage::{ArgumentDoc, CommandUsage, OptionDoc};
use crate::core::config::LoadOptions;
use crate::core::error::CommandError;
use crate::engine::{Context, Handler, KindDispatcher};
use crate::targets;

pub const USAGE: CommandUsage = CommandUsage {
    summary: "Create a build.",
    arguments: &[
        ArgumentDoc {
            name: "entry",
            required: false,
            description: "entry point (default: src/index.js)",
        },
        ArgumentDoc {
            name: "dist_dir",
            required: false,
            description: "build output directory (default: dist/, or lib/ for components)",
        },
    ],
    options: &[
        OptionDoc {
            flag: "--title",
            description: "contents for <title>",
        },
        OptionDoc {
            flag: "--mount-id",
            description: "id for the <div> the app renders into",
        },
        OptionDoc {
            flag: "--vendor",
            description: "create a separate vendor bundle (apps only)",
        },
    ],
};

/// Handler for `rig build`.
pub struct BuildCommand {
    dispatcher: KindDispatcher,
}

impl BuildCommand {
    pub fn new() -> Self {
        Self {
            dispatcher: targets::build_dispatcher(),
        }
    }
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for BuildCommand {
    async fn run(&self, ctx: &Context, args: &InvocationArgs) -> Result<(), CommandError> {
        let config = ctx.load_config(args, LoadOptions::REQUIRED)?;
        self.dispatcher.dispatch(ctx, &config, args).await
    }
}

pub fn export() -> Result<HandlerExport, CommandError> {
    Ok(HandlerExport::Module {
        default: Some(Arc::new(BuildCommand::new())),
        callable: None,
    })
}
