//! cli::report
//!
//! Turns a command failure into console lines and an exit status.
//!
//! # Rules
//!
//! - User errors print their message only; an attached trace is dropped
//! - Internal errors print [`INTERNAL_BANNER`], the message, and the trace
//!   when one is attached
//! - Every reported error exits with status 1

use super::Outcome;
use crate::core::error::CommandError;
use crate::ui::output::{error, ConsoleLine};

/// Banner printed before an internal error.
pub const INTERNAL_BANNER: &str = "rig: error running command";

/// Exit status for any reported error.
pub const FAILURE: i32 = 1;

/// Report `err`.
pub fn report(err: &CommandError) -> Outcome {
    let lines = match err {
        CommandError::User { message, trace } => {
            if let Some(trace) = trace {
                tracing::debug!(%trace, "user error trace suppressed");
            }
            vec![ConsoleLine::stderr(error(message).to_string())]
        }
        CommandError::Internal { message, trace } => {
            let mut lines = vec![
                ConsoleLine::stderr(error(INTERNAL_BANNER).to_string()),
                ConsoleLine::stderr(message.clone()),
            ];
            if let Some(trace) = trace {
                lines.extend(trace.lines().map(ConsoleLine::stderr));
            }
            lines
        }
    };

    Outcome {
        exit_code: FAILURE,
        lines,
    }
}
