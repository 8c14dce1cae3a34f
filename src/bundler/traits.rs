//! bundler::traits
//!
//! Bundler trait definition and the task descriptions handlers hand to it.
//!
//! # Design
//!
//! The `Bundler` trait is async because both operations run an external
//! toolchain. A build resolves when the bundle is written; a serve resolves
//! only when the dev server exits.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::error::CommandError;
use crate::core::types::ProjectKind;

/// Errors from bundler operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BundlerError {
    /// The bundler executable could not be found.
    #[error("could not run '{0}', is it installed?")]
    NotInstalled(String),

    /// The bundler ran and reported failure.
    #[error("'{program}' exited with {status}")]
    Failed {
        /// Program that was run
        program: String,
        /// Exit status description
        status: String,
    },

    /// Spawning or waiting on the bundler failed.
    #[error("failed to run '{program}': {message}")]
    Io {
        /// Program that was run
        program: String,
        /// Underlying I/O error
        message: String,
    },
}

impl From<BundlerError> for CommandError {
    fn from(err: BundlerError) -> Self {
        match &err {
            BundlerError::Io { .. } => {
                CommandError::internal(format!("rig: {}", err)).with_trace(format!("{:?}", err))
            }
            BundlerError::NotInstalled(_) | BundlerError::Failed { .. } => {
                CommandError::user(format!("rig: {}", err))
            }
        }
    }
}

/// Settings for the generated HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Contents for `<title>`
    pub title: String,
    /// Id of the element the app renders into
    pub mount_id: String,
}

/// A request to produce a static build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTask {
    /// Kind of project being built
    pub kind: ProjectKind,
    /// Entry module
    pub entry: String,
    /// Output directory
    pub dist_dir: String,
    /// HTML page settings
    pub html: HtmlOptions,
    /// Emit a separate vendor bundle
    pub vendor: bool,
}

/// A request to run the development server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeTask {
    /// Kind of project being served
    pub kind: ProjectKind,
    /// Entry module
    pub entry: String,
    /// Hostname to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// HTML page settings
    pub html: HtmlOptions,
    /// Serve the index page from any path
    pub fallback: bool,
    /// Reload the page if hot reloading fails
    pub reload: bool,
    /// Install missing npm dependencies on the fly
    pub auto_install: bool,
    /// Show module info
    pub info: bool,
}

impl ServeTask {
    /// The URL the dev server will listen on.
    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

impl fmt::Display for BuildTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.entry, self.dist_dir)
    }
}

impl fmt::Display for ServeTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.kind, self.entry, self.url())
    }
}

/// The toolchain that actually bundles and serves.
///
/// Concrete project handlers decide *what* to build or serve; a `Bundler`
/// decides *how*.
#[async_trait]
pub trait Bundler: Send + Sync {
    /// Short name for logs (e.g. "webpack").
    fn name(&self) -> &str;

    /// Produce a static build.
    async fn build(&self, task: &BuildTask) -> Result<(), BundlerError>;

    /// Run the development server until it exits.
    async fn serve(&self, task: &ServeTask) -> Result<(), BundlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn operator_fixable_errors_are_user_errors() {
        let err: CommandError = BundlerError::NotInstalled("webpack".into()).into();
        assert_eq!(err.kind(), ErrorKind::User);
        assert_eq!(err.message(), "rig: could not run 'webpack', is it installed?");

        let err: CommandError = BundlerError::Failed {
            program: "webpack".into(),
            status: "exit status: 2".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::User);
    }

    #[test]
    fn io_errors_are_internal() {
        let err: CommandError = BundlerError::Io {
            program: "webpack".into(),
            message: "broken pipe".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.trace().unwrap().contains("broken pipe"));
    }

    #[test]
    fn serve_url() {
        let task = ServeTask {
            kind: ProjectKind::ReactApp,
            entry: "src/index.js".into(),
            host: "localhost".into(),
            port: 3000,
            html: HtmlOptions {
                title: "React App".into(),
                mount_id: "app".into(),
            },
            fallback: false,
            reload: false,
            auto_install: false,
            info: false,
        };
        assert_eq!(task.url(), "http://localhost:3000/");
        assert_eq!(task.to_string(), "react-app src/index.js at http://localhost:3000/");
    }
}
