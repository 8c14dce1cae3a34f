//! cli
//!
//! The front controller: from raw arguments to an exit status.
//!
//! # Responsibilities
//!
//! - Parse arguments ([`args`])
//! - Answer `version` and `help` before anything is resolved
//! - Resolve the command through the [`registry`] and run its handler
//! - Route every failure through the error [`report`]er
//!
//! # Architecture
//!
//! [`run`] never exits the process and never writes to the terminal. It
//! returns an [`Outcome`]; `main` emits the lines and exits with the code.
//!
//! # Exit status
//!
//! | Invocation | Status |
//! |------------|--------|
//! | `--version`, `-v`, `version`, `v` (anywhere) | 0 |
//! | `--help`, `-h`, `help`, `h` | 0 |
//! | no command and no help flag | 1 (usage is still printed) |
//! | unknown command | 1 |
//! | handler failure | 1 |
//! | handler success | 0 |

pub mod args;
pub mod commands;
pub mod registry;
pub mod report;
pub mod setup;
pub mod usage;

pub use args::{Cli, InvocationArgs};
pub use registry::CommandRegistry;

use crate::core::error::CommandError;
use crate::engine::{self, Context};
use crate::ui::output::{error, ConsoleLine};

/// Version string printed by `--version`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// The result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Process exit status
    pub exit_code: i32,
    /// Lines to print, in order
    pub lines: Vec<ConsoleLine>,
}

impl Outcome {
    /// Success with nothing to print.
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            lines: Vec::new(),
        }
    }

    fn stdout(exit_code: i32, lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            exit_code,
            lines: lines.into_iter().map(ConsoleLine::stdout).collect(),
        }
    }
}

/// Run one invocation.
///
/// `raw` excludes the program name. Long-running handlers (a dev server)
/// keep this future pending until they finish.
pub async fn run<I, T>(raw: I, registry: &CommandRegistry, ctx: Context) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
    let args = match InvocationArgs::parse(raw.iter().cloned()) {
        Ok(args) => args,
        Err(err) => {
            // clap rejected the leading globals; version and help still win.
            let lenient = InvocationArgs::from_tokens(raw);
            setup::init_tracing(lenient.flag("debug"));
            tracing::debug!(%err, "falling back to lenient parse");
            return meta(&lenient, registry)
                .unwrap_or_else(|| report::report(&parse_error(&err)));
        }
    };

    setup::init_tracing(args.flag("debug"));
    tracing::debug!(command = ?args.command(), "parsed arguments");

    if let Some(outcome) = meta(&args, registry) {
        return outcome;
    }

    let name = match args.command() {
        Some(name) => name,
        None => return Outcome::stdout(1, usage::render(registry)),
    };

    let handler = match registry.resolve(name) {
        Ok(handler) => handler,
        Err(registry::ResolveError::NotFound(name)) => {
            tracing::debug!(%name, "unknown command");
            return Outcome {
                exit_code: report::FAILURE,
                lines: vec![ConsoleLine::stderr(
                    error(&format!("rig: unknown command: {}", name)).to_string(),
                )],
            };
        }
        Err(err) => return report::report(&CommandError::from(err)),
    };

    let ctx = ctx.with_debug(args.flag("debug"));
    match engine::run_handler(handler, ctx, args).await {
        Ok(()) => Outcome::success(),
        Err(err) => report::report(&err),
    }
}

/// Answer an explicit version or help request.
fn meta(args: &InvocationArgs, registry: &CommandRegistry) -> Option<Outcome> {
    if args.flag("version") || matches!(args.command(), Some("v" | "version")) {
        return Some(Outcome::stdout(0, [VERSION.to_string()]));
    }
    if args.flag("help") || matches!(args.command(), Some("h" | "help")) {
        return Some(Outcome::stdout(0, usage::render(registry)));
    }
    None
}

fn parse_error(err: &clap::Error) -> CommandError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let detail = first.strip_prefix("error: ").unwrap_or(first);
    CommandError::user(format!("rig: {}", detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::mock::MockBundler;
    use crate::cli::registry::HandlerExport;
    use crate::cli::usage::CommandUsage;
    use crate::engine::Handler;
    use crate::ui::output::Stream;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const USAGE: CommandUsage = CommandUsage {
        summary: "test command",
        arguments: &[],
        options: &[],
    };

    struct Succeed;

    #[async_trait]
    impl Handler for Succeed {
        async fn run(&self, _ctx: &Context, _args: &InvocationArgs) -> Result<(), CommandError> {
            Ok(())
        }
    }

    struct FailNow(CommandError);

    #[async_trait]
    impl Handler for FailNow {
        async fn run(&self, _ctx: &Context, _args: &InvocationArgs) -> Result<(), CommandError> {
            Err(self.0.clone())
        }
    }

    struct FailLater(CommandError);

    #[async_trait]
    impl Handler for FailLater {
        async fn run(&self, _ctx: &Context, _args: &InvocationArgs) -> Result<(), CommandError> {
            tokio::task::yield_now().await;
            Err(self.0.clone())
        }
    }

    struct Panics;

    #[async_trait]
    impl Handler for Panics {
        async fn run(&self, _ctx: &Context, _args: &InvocationArgs) -> Result<(), CommandError> {
            panic!("unexpected state");
        }
    }

    fn ctx() -> Context {
        Context::new(std::env::temp_dir(), Arc::new(MockBundler::new()))
    }

    fn registry_with(name: &str, handler: Arc<dyn Handler>) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register(name, &USAGE, move || {
                Ok(HandlerExport::Direct(Arc::clone(&handler)))
            })
            .unwrap();
        registry
    }

    fn default_registry() -> CommandRegistry {
        commands::registry().unwrap()
    }

    async fn invoke(raw: &[&str], registry: &CommandRegistry) -> Outcome {
        colored::control::set_override(false);
        run(raw.iter().copied(), registry, ctx()).await
    }

    fn text(outcome: &Outcome, stream: Stream) -> String {
        outcome
            .lines
            .iter()
            .filter(|l| l.stream == stream)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn version_short_circuits() {
        let registry = default_registry();
        let cases: &[&[&str]] = &[
            &["--version"],
            &["-v"],
            &["version"],
            &["v"],
            &["nonsense", "--version"],
            &["serve", "-v"],
            &["--help", "--version"],
            &["-v", "-v"],
            &["--debug", "--debug", "-v"],
            &["-vc"],
            &["-c", "--version"],
            &["-c", "alt.toml", "-c", "other.toml", "version"],
        ];
        for raw in cases {
            let outcome = invoke(raw, &registry).await;
            assert_eq!(outcome.exit_code, 0, "{:?}", raw);
            assert_eq!(text(&outcome, Stream::Stdout), VERSION);
        }
    }

    #[tokio::test]
    async fn version_runs_no_handler() {
        let resolves = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resolves);
        let mut registry = CommandRegistry::new();
        registry
            .register("serve", &USAGE, move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(HandlerExport::Direct(Arc::new(Succeed)))
            })
            .unwrap();

        invoke(&["serve", "--version"], &registry).await;
        invoke(&["serve", "--help"], &registry).await;
        assert_eq!(resolves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn help_exit_codes() {
        let registry = default_registry();

        let cases: &[&[&str]] = &[
            &["--help"],
            &["-h"],
            &["help"],
            &["h"],
            &["serve", "--help"],
            &["--help", "-h"],
            &["-hc"],
            &["-c", "--help"],
            &["-c", "-h"],
        ];
        for raw in cases {
            let outcome = invoke(raw, &registry).await;
            assert_eq!(outcome.exit_code, 0, "{:?}", raw);
            assert!(text(&outcome, Stream::Stdout).starts_with("Usage: rig (run|build|serve)"));
        }

        let outcome = invoke(&[], &registry).await;
        assert_eq!(outcome.exit_code, 1);
        assert!(text(&outcome, Stream::Stdout).starts_with("Usage: rig"));
        assert!(text(&outcome, Stream::Stderr).is_empty());
    }

    #[tokio::test]
    async fn help_lists_every_command() {
        let registry = default_registry();
        let help = text(&invoke(&["help"], &registry).await, Stream::Stdout);

        assert!(help.contains("rig run <entry> [options]"));
        assert!(help.contains("rig build [entry] [dist_dir] [options]"));
        assert!(help.contains("rig serve [entry] [options]"));
        assert!(help.contains("--port"));
        assert!(help.contains("--vendor"));
        assert!(help.contains("-c, --config"));
    }

    #[tokio::test]
    async fn unknown_command_names_token() {
        let registry = default_registry();
        let outcome = invoke(&["deploy", "now"], &registry).await;

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(text(&outcome, Stream::Stderr), "rig: unknown command: deploy");
        assert!(text(&outcome, Stream::Stdout).is_empty());
    }

    #[tokio::test]
    async fn success_exits_zero_silently() {
        let registry = registry_with("noop", Arc::new(Succeed));
        assert_eq!(invoke(&["noop"], &registry).await, Outcome::success());
    }

    #[tokio::test]
    async fn immediate_and_deferred_failures_report_identically() {
        for err in [
            CommandError::user("rig: bad project"),
            CommandError::internal("socket closed").with_trace("at connect"),
        ] {
            let now = invoke(&["go"], &registry_with("go", Arc::new(FailNow(err.clone())))).await;
            let later = invoke(&["go"], &registry_with("go", Arc::new(FailLater(err.clone())))).await;

            assert_eq!(now.exit_code, 1);
            assert_eq!(now, later);
            assert_eq!(now, report::report(&err));
        }
    }

    #[tokio::test]
    async fn panic_reports_internal_error() {
        let registry = registry_with("boom", Arc::new(Panics));
        let outcome = invoke(&["boom"], &registry).await;

        assert_eq!(outcome.exit_code, 1);
        let stderr = text(&outcome, Stream::Stderr);
        assert!(stderr.starts_with(report::INTERNAL_BANNER));
        assert!(stderr.contains("unexpected state"));
    }

    #[tokio::test]
    async fn broken_locator_is_internal() {
        let mut registry = CommandRegistry::new();
        registry
            .register("broken", &USAGE, || {
                Ok(HandlerExport::Module {
                    default: None,
                    callable: None,
                })
            })
            .unwrap();

        let outcome = invoke(&["broken"], &registry).await;
        assert_eq!(outcome.exit_code, 1);
        assert!(text(&outcome, Stream::Stderr).starts_with(report::INTERNAL_BANNER));
    }

    #[tokio::test]
    async fn malformed_global_option_is_user_error() {
        let outcome = invoke(&["-c"], &default_registry()).await;
        assert_eq!(outcome.exit_code, 1);
        let stderr = text(&outcome, Stream::Stderr);
        assert!(stderr.starts_with("rig: "));
        assert!(!stderr.contains(report::INTERNAL_BANNER));
    }

    #[tokio::test]
    async fn serve_without_config_is_user_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = Context::new(temp.path(), Arc::new(MockBundler::new()));
        colored::control::set_override(false);

        let outcome = run(["serve"], &default_registry(), ctx).await;

        assert_eq!(outcome.exit_code, 1);
        assert!(text(&outcome, Stream::Stderr).starts_with("rig: couldn't find a config file"));
    }
}
