//! engine::dispatch
//!
//! Routes a polymorphic command to the handler for the project's kind.
//!
//! # Invariants
//!
//! - Exactly one handler runs per dispatch, chosen by an exhaustive match
//!   over [`ProjectKind`]
//! - An absent or unrecognized `type` tag invokes no handler and yields a
//!   user error: the project is misconfigured, not the tool
//! - The dispatcher holds no per-call state and performs no I/O
//!
//! # Example
//!
//! ```ignore
//! let serve = KindDispatcher::new("serve", react_app, web_app, react_component);
//! serve.dispatch(&ctx, &config, &args).await?;
//! ```

use std::sync::Arc;

use super::handler::ProjectHandler;
use super::Context;
use crate::cli::args::InvocationArgs;
use crate::core::config::ProjectConfig;
use crate::core::error::CommandError;
use crate::core::types::ProjectKind;

/// One handler per project kind, for a single action ("serve", "build").
#[derive(Clone)]
pub struct KindDispatcher {
    action: &'static str,
    react_app: Arc<dyn ProjectHandler>,
    web_app: Arc<dyn ProjectHandler>,
    react_component: Arc<dyn ProjectHandler>,
}

impl KindDispatcher {
    /// Create a dispatcher for `action` with a handler for every kind.
    pub fn new(
        action: &'static str,
        react_app: Arc<dyn ProjectHandler>,
        web_app: Arc<dyn ProjectHandler>,
        react_component: Arc<dyn ProjectHandler>,
    ) -> Self {
        Self {
            action,
            react_app,
            web_app,
            react_component,
        }
    }

    /// The action this dispatcher routes.
    pub fn action(&self) -> &'static str {
        self.action
    }

    /// The handler registered for `kind`.
    pub fn handler_for(&self, kind: ProjectKind) -> &Arc<dyn ProjectHandler> {
        match kind {
            ProjectKind::ReactApp => &self.react_app,
            ProjectKind::WebApp => &self.web_app,
            ProjectKind::ReactComponent => &self.react_component,
        }
    }

    /// Select the handler for `config`'s kind, or the user error explaining
    /// why nothing can be handled.
    pub fn select(&self, config: &ProjectConfig) -> Result<&Arc<dyn ProjectHandler>, CommandError> {
        match config.kind() {
            Some(kind) => Ok(self.handler_for(kind)),
            None => {
                tracing::debug!(
                    action = self.action,
                    tag = config.kind_tag().unwrap_or("<none>"),
                    "no handler for project type"
                );
                Err(CommandError::user(format!(
                    "rig: unable to {} anything in the current directory",
                    self.action
                )))
            }
        }
    }

    /// Dispatch to the handler for `config`'s kind, passing `args` through.
    pub async fn dispatch(
        &self,
        ctx: &Context,
        config: &ProjectConfig,
        args: &InvocationArgs,
    ) -> Result<(), CommandError> {
        let handler = self.select(config)?;
        tracing::debug!(
            action = self.action,
            kind = config.kind_tag().unwrap_or_default(),
            "dispatching"
        );
        handler.run(ctx, config, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::mock::MockBundler;
    use crate::core::error::ErrorKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records which kind handlers ran.
    #[derive(Default)]
    struct Calls(Mutex<Vec<&'static str>>);

    struct Recording {
        name: &'static str,
        calls: Arc<Calls>,
    }

    #[async_trait]
    impl ProjectHandler for Recording {
        async fn run(
            &self,
            _ctx: &Context,
            _config: &ProjectConfig,
            _args: &InvocationArgs,
        ) -> Result<(), CommandError> {
            self.calls.0.lock().unwrap().push(self.name);
            Ok(())
        }
    }

    fn dispatcher(calls: &Arc<Calls>) -> KindDispatcher {
        let handler = |name| -> Arc<dyn ProjectHandler> {
            Arc::new(Recording {
                name,
                calls: Arc::clone(calls),
            })
        };
        KindDispatcher::new(
            "serve",
            handler("react-app"),
            handler("web-app"),
            handler("react-component"),
        )
    }

    fn ctx() -> Context {
        Context::new(std::env::temp_dir(), Arc::new(MockBundler::new()))
    }

    fn config(tag: Option<&str>) -> ProjectConfig {
        ProjectConfig {
            kind: tag.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn react_app_runs_only_react_app_handler() {
        let calls = Arc::new(Calls::default());
        let serve = dispatcher(&calls);

        serve
            .dispatch(&ctx(), &config(Some("react-app")), &InvocationArgs::default())
            .await
            .unwrap();

        assert_eq!(*calls.0.lock().unwrap(), vec!["react-app"]);
    }

    #[tokio::test]
    async fn each_kind_routes_to_its_handler() {
        for kind in ProjectKind::ALL {
            let calls = Arc::new(Calls::default());
            let serve = dispatcher(&calls);

            serve
                .dispatch(&ctx(), &config(Some(kind.tag())), &InvocationArgs::default())
                .await
                .unwrap();

            assert_eq!(*calls.0.lock().unwrap(), vec![kind.tag()]);
        }
    }

    #[tokio::test]
    async fn unknown_kind_is_user_error_and_runs_nothing() {
        for tag in [Some("angular-app"), Some(""), None] {
            let calls = Arc::new(Calls::default());
            let serve = dispatcher(&calls);

            let err = serve
                .dispatch(&ctx(), &config(tag), &InvocationArgs::default())
                .await
                .unwrap_err();

            assert_eq!(err.kind(), ErrorKind::User);
            assert_eq!(
                err.message(),
                "rig: unable to serve anything in the current directory"
            );
            assert!(calls.0.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn message_names_the_action() {
        let calls = Arc::new(Calls::default());
        let build = KindDispatcher {
            action: "build",
            ..dispatcher(&calls)
        };
        let err = build.select(&config(None)).err().unwrap();
        assert!(err.message().contains("unable to build anything"));
    }
}
