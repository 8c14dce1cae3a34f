//! rig binary entry point.

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use rig::bundler::create_bundler;
use rig::cli::{self, commands, setup};
use rig::engine::Context;
use rig::ui::output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let raw: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let registry = commands::registry().context("failed to build the command registry")?;
    let ctx = Context::new(&cwd, create_bundler(&cwd));

    setup::quiet_panics();

    let outcome = cli::run(raw, &registry, ctx).await;
    output::emit(&outcome.lines).context("failed to write output")?;

    Ok(ExitCode::from(u8::try_from(outcome.exit_code).unwrap_or(1)))
}
