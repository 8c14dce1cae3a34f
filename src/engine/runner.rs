//! engine::runner
//!
//! Runs a resolved handler to completion.
//!
//! The handler runs as its own task so that a panic unwinds into the
//! `JoinError` rather than through the caller. Whichever way the handler
//! fails, the caller receives a single `CommandError`.

use std::any::Any;
use std::sync::Arc;

use tokio::task::JoinError;

use super::handler::Handler;
use super::Context;
use crate::cli::args::InvocationArgs;
use crate::core::error::CommandError;

/// Run `handler` and wait for it to finish.
///
/// Must be called from within a tokio runtime.
pub async fn run_handler(
    handler: Arc<dyn Handler>,
    ctx: Context,
    args: InvocationArgs,
) -> Result<(), CommandError> {
    let task = tokio::spawn(async move { handler.run(&ctx, &args).await });

    match task.await {
        Ok(result) => result,
        Err(err) => Err(join_error(err)),
    }
}

fn join_error(err: JoinError) -> CommandError {
    if err.is_panic() {
        let payload = err.into_panic();
        let detail = panic_message(payload.as_ref());
        tracing::debug!(%detail, "handler panicked");
        CommandError::internal(format!("handler panicked: {}", detail))
            .with_trace(format!("panic: {}", detail))
    } else {
        CommandError::internal("handler task was cancelled")
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
