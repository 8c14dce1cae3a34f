//! bundler::webpack
//!
//! Bundler backed by the webpack CLI.
//!
//! # Invocation
//!
//! ```text
//! webpack --mode production --entry ./src/index.js --output-path dist
//! webpack serve --mode development --entry ./src/index.js --host localhost --port 3000 --hot
//! ```
//!
//! Settings webpack has no flag for (page title, mount id, project kind,
//! vendor splitting, auto-install) are passed as `RIG_*` environment
//! variables for the project's webpack config to read.

use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use super::traits::{BuildTask, Bundler, BundlerError, HtmlOptions, ServeTask};
use crate::core::types::ProjectKind;

/// Default executable name.
pub const DEFAULT_PROGRAM: &str = "webpack";

/// Runs webpack as a child process in the project directory.
#[derive(Debug, Clone)]
pub struct WebpackBundler {
    program: String,
    cwd: PathBuf,
}

impl WebpackBundler {
    /// Create a bundler that runs `program` in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }

    /// The executable this bundler runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for a production build.
    pub fn build_args(task: &BuildTask) -> Vec<String> {
        vec![
            "--mode".into(),
            "production".into(),
            "--entry".into(),
            module_path(&task.entry),
            "--output-path".into(),
            task.dist_dir.clone(),
        ]
    }

    /// Arguments for the development server.
    pub fn serve_args(task: &ServeTask) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "serve".into(),
            "--mode".into(),
            "development".into(),
            "--entry".into(),
            module_path(&task.entry),
            "--host".into(),
            task.host.clone(),
            "--port".into(),
            task.port.to_string(),
            "--hot".into(),
        ];
        if task.fallback {
            args.push("--history-api-fallback".into());
        }
        if task.reload {
            args.push("--live-reload".into());
        }
        if task.info {
            args.push("--stats".into());
            args.push("verbose".into());
        }
        args
    }

    /// Environment for a build.
    pub fn build_env(task: &BuildTask) -> Vec<(&'static str, String)> {
        let mut env = base_env(task.kind, &task.html);
        env.push(("RIG_VENDOR_BUNDLE", flag(task.vendor)));
        env
    }

    /// Environment for the development server.
    pub fn serve_env(task: &ServeTask) -> Vec<(&'static str, String)> {
        let mut env = base_env(task.kind, &task.html);
        env.push(("RIG_AUTO_INSTALL", flag(task.auto_install)));
        env
    }

    async fn exec(
        &self,
        args: Vec<String>,
        env: Vec<(&'static str, String)>,
    ) -> Result<(), BundlerError> {
        tracing::info!(program = %self.program, ?args, cwd = %self.cwd.display(), "running bundler");

        let status = Command::new(&self.program)
            .args(&args)
            .envs(env)
            .current_dir(&self.cwd)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == IoErrorKind::NotFound {
                    BundlerError::NotInstalled(self.program.clone())
                } else {
                    BundlerError::Io {
                        program: self.program.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BundlerError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

#[async_trait]
impl Bundler for WebpackBundler {
    fn name(&self) -> &str {
        &self.program
    }

    async fn build(&self, task: &BuildTask) -> Result<(), BundlerError> {
        self.exec(Self::build_args(task), Self::build_env(task)).await
    }

    async fn serve(&self, task: &ServeTask) -> Result<(), BundlerError> {
        self.exec(Self::serve_args(task), Self::serve_env(task)).await
    }
}

fn base_env(kind: ProjectKind, html: &HtmlOptions) -> Vec<(&'static str, String)> {
    vec![
        ("RIG_PROJECT_KIND", kind.tag().to_string()),
        ("RIG_HTML_TITLE", html.title.clone()),
        ("RIG_MOUNT_ID", html.mount_id.clone()),
    ]
}

fn flag(set: bool) -> String {
    let value = if set { "1" } else { "0" };
    value.to_string()
}

/// webpack resolves bare entries as packages; project files need a `./`.
fn module_path(entry: &str) -> String {
    if entry.starts_with("./") || entry.starts_with("../") || entry.starts_with('/') {
        entry.to_string()
    } else {
        format!("./{}", entry)
    }
}
