//! core::config
//!
//! Project configuration loading.
//!
//! # Location
//!
//! 1. `--config <path>` if given, relative to the working directory
//! 2. `rig.config.toml` in the working directory
//!
//! # Required vs optional
//!
//! Commands that cannot do anything without knowing the project kind load
//! with `required: true`; a missing file is then a user error. Commands with
//! sensible defaults load with `required: false` and get an empty config.
//! An explicit `--config` that points nowhere is always an error.
//!
//! A fresh [`ProjectConfig`] is produced for every load. Nothing is cached.

pub mod schema;

pub use schema::{DevServerConfig, HtmlConfig, ProjectConfig};

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::error::CommandError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rig.config.toml";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't find a config file at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {message}", .path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        if matches!(err, ConfigError::ReadError { .. }) {
            CommandError::internal(format!("rig: {}", err)).with_trace(format!("{:?}", err))
        } else {
            CommandError::user(format!("rig: {}", err))
        }
    }
}

/// Options for a single load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Fail if no config file exists.
    pub required: bool,
}

impl LoadOptions {
    /// A load that fails without a config file.
    pub const REQUIRED: LoadOptions = LoadOptions { required: true };
    /// A load that falls back to defaults.
    pub const OPTIONAL: LoadOptions = LoadOptions { required: false };
}

/// Loads project configuration relative to a working directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    cwd: PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Resolve the config path: the explicit one, or the default file name.
    pub fn config_path(&self, explicit: Option<&str>) -> PathBuf {
        match explicit {
            Some(path) => self.cwd.join(path),
            None => self.cwd.join(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load the project config.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the file is missing and either
    ///   `options.required` is set or the path was given explicitly
    /// - `ConfigError::ParseError` / `ConfigError::InvalidValue` for bad contents
    /// - `ConfigError::ReadError` if the file exists but cannot be read
    pub fn load(
        &self,
        explicit: Option<&str>,
        options: LoadOptions,
    ) -> Result<ProjectConfig, ConfigError> {
        let path = self.config_path(explicit);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                if options.required || explicit.is_some() {
                    return Err(ConfigError::NotFound { path });
                }
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(ProjectConfig::default());
            }
            Err(e) => return Err(ConfigError::ReadError { path, source: e }),
        };

        let config = Self::parse(&path, &contents)?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            kind = config.kind_tag().unwrap_or("<none>"),
            "loaded config"
        );
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<ProjectConfig, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
