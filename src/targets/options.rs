//! targets::options
//!
//! Resolves bundler tasks from command-line options, project config, and
//! per-kind defaults.
//!
//! # Precedence
//!
//! 1. Command-line option or positional
//! 2. Project config value
//! 3. Kind default

use crate::bundler::{BuildTask, HtmlOptions, ServeTask};
use crate::cli::args::InvocationArgs;
use crate::core::config::ProjectConfig;
use crate::core::error::CommandError;
use crate::core::types::ProjectKind;

/// Default dev server host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default dev server port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default mount element id.
pub const DEFAULT_MOUNT_ID: &str = "app";

/// Per-kind defaults.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    /// Entry module when serving
    pub serve_entry: &'static str,
    /// Entry module when building
    pub build_entry: &'static str,
    /// Build output directory
    pub dist_dir: &'static str,
    /// Page title
    pub title: &'static str,
}

/// Resolve a dev server task.
///
/// # Errors
///
/// Returns a user error for a malformed or zero `--port`.
pub fn serve_task(
    kind: ProjectKind,
    defaults: &Defaults,
    config: &ProjectConfig,
    args: &InvocationArgs,
) -> Result<ServeTask, CommandError> {
    let dev_server = config.dev_server.clone().unwrap_or_default();

    let port = match args.parse_option::<u16>("port")? {
        Some(0) => {
            return Err(CommandError::user(
                "rig: --port must be between 1 and 65535",
            ))
        }
        Some(port) => port,
        None => dev_server.port.unwrap_or(DEFAULT_PORT),
    };

    Ok(ServeTask {
        kind,
        entry: entry(defaults.serve_entry, config, args),
        host: args
            .parse_option::<String>("host")?
            .or(dev_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        html: html(defaults, config, args)?,
        fallback: args.flag("fallback"),
        reload: args.flag("reload"),
        auto_install: args.flag("auto-install"),
        info: args.flag("info"),
    })
}

/// Resolve a static build task.
///
/// # Errors
///
/// Returns a user error for a page option given without a value.
pub fn build_task(
    kind: ProjectKind,
    defaults: &Defaults,
    config: &ProjectConfig,
    args: &InvocationArgs,
) -> Result<BuildTask, CommandError> {
    Ok(BuildTask {
        kind,
        entry: entry(defaults.build_entry, config, args),
        dist_dir: args
            .positional(1)
            .map(str::to_string)
            .or_else(|| config.dist.clone())
            .unwrap_or_else(|| defaults.dist_dir.to_string()),
        html: html(defaults, config, args)?,
        vendor: args.flag("vendor"),
    })
}

fn entry(default: &str, config: &ProjectConfig, args: &InvocationArgs) -> String {
    args.positional(0)
        .map(str::to_string)
        .or_else(|| config.entry.clone())
        .unwrap_or_else(|| default.to_string())
}

fn html(
    defaults: &Defaults,
    config: &ProjectConfig,
    args: &InvocationArgs,
) -> Result<HtmlOptions, CommandError> {
    let html = config.html.clone().unwrap_or_default();
    Ok(HtmlOptions {
        title: args
            .parse_option::<String>("title")?
            .or(html.title)
            .unwrap_or_else(|| defaults.title.to_string()),
        mount_id: args
            .parse_option::<String>("mount-id")?
            .or(html.mount_id)
            .unwrap_or_else(|| DEFAULT_MOUNT_ID.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DevServerConfig, HtmlConfig};

    const DEFAULTS: Defaults = Defaults {
        serve_entry: "src/index.js",
        build_entry: "src/index.js",
        dist_dir: "dist",
        title: "React App",
    };

    fn args(tokens: &[&str]) -> InvocationArgs {
        InvocationArgs::from_tokens(tokens.iter().copied())
    }

    fn configured() -> ProjectConfig {
        ProjectConfig {
            kind: Some("react-app".into()),
            entry: Some("app/main.js".into()),
            dist: Some("public".into()),
            html: Some(HtmlConfig {
                title: Some("Dashboard".into()),
                mount_id: Some("root".into()),
            }),
            dev_server: Some(DevServerConfig {
                host: Some("0.0.0.0".into()),
                port: Some(8080),
            }),
        }
    }

    #[test]
    fn serve_defaults() {
        let task = serve_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &ProjectConfig::default(),
            &args(&["serve"]),
        )
        .unwrap();

        assert_eq!(task.entry, "src/index.js");
        assert_eq!(task.host, DEFAULT_HOST);
        assert_eq!(task.port, DEFAULT_PORT);
        assert_eq!(task.html.title, "React App");
        assert_eq!(task.html.mount_id, DEFAULT_MOUNT_ID);
        assert!(!task.fallback);
    }

    #[test]
    fn serve_config_overrides_defaults() {
        let task = serve_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &configured(),
            &args(&["serve"]),
        )
        .unwrap();

        assert_eq!(task.entry, "app/main.js");
        assert_eq!(task.host, "0.0.0.0");
        assert_eq!(task.port, 8080);
        assert_eq!(task.html.title, "Dashboard");
        assert_eq!(task.html.mount_id, "root");
    }

    #[test]
    fn serve_cli_overrides_config() {
        let task = serve_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &configured(),
            &args(&[
                "serve",
                "other.js",
                "--port",
                "4000",
                "--host",
                "127.0.0.1",
                "--title",
                "Mine",
                "--mount-id",
                "mount",
                "--fallback",
                "--reload",
                "--auto-install",
                "--info",
            ]),
        )
        .unwrap();

        assert_eq!(task.entry, "other.js");
        assert_eq!(task.port, 4000);
        assert_eq!(task.host, "127.0.0.1");
        assert_eq!(task.html.title, "Mine");
        assert_eq!(task.html.mount_id, "mount");
        assert!(task.fallback && task.reload && task.auto_install && task.info);
    }

    #[test]
    fn serve_rejects_bad_port() {
        for port in ["0", "seventy", "70000"] {
            let err = serve_task(
                ProjectKind::ReactApp,
                &DEFAULTS,
                &ProjectConfig::default(),
                &args(&["serve", "--port", port]),
            )
            .unwrap_err();
            assert!(err.is_user(), "port {} should be a user error", port);
        }
    }

    #[test]
    fn build_precedence() {
        let task = build_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &configured(),
            &args(&["build"]),
        )
        .unwrap();
        assert_eq!(task.entry, "app/main.js");
        assert_eq!(task.dist_dir, "public");

        let task = build_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &configured(),
            &args(&["build", "x.js", "out", "--vendor"]),
        )
        .unwrap();
        assert_eq!(task.entry, "x.js");
        assert_eq!(task.dist_dir, "out");
        assert!(task.vendor);

        let task = build_task(
            ProjectKind::ReactApp,
            &DEFAULTS,
            &ProjectConfig::default(),
            &args(&["build"]),
        )
        .unwrap();
        assert_eq!(task.dist_dir, "dist");
    }

    #[test]
    fn string_options_without_value_are_rejected() {
        for (flag, kind) in [("--title", "build"), ("--mount-id", "build"), ("--host", "serve")] {
            let invocation = args(&[kind, flag]);
            let err = if kind == "serve" {
                serve_task(ProjectKind::ReactApp, &DEFAULTS, &configured(), &invocation)
                    .unwrap_err()
            } else {
                build_task(ProjectKind::ReactApp, &DEFAULTS, &configured(), &invocation)
                    .unwrap_err()
            };
            assert!(err.is_user());
            assert!(err.message().contains("requires a value"), "{}", flag);
        }
    }
}
