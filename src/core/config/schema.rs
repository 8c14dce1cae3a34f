//! core::config::schema
//!
//! Project configuration schema.
//!
//! # Example
//!
//! ```toml
//! type = "react-app"
//! entry = "src/main.js"
//! dist = "build"
//!
//! [html]
//! title = "Dashboard"
//! mount_id = "root"
//!
//! [dev_server]
//! host = "0.0.0.0"
//! port = 8080
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing. The `type` tag is deliberately kept
//! as a raw string: an unrecognized tag is not a parse error, it is a
//! project the polymorphic commands cannot handle.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::ProjectKind;

/// Project configuration, as declared in `rig.config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project kind tag (e.g. "react-app")
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Entry module, relative to the project directory
    pub entry: Option<String>,

    /// Build output directory
    pub dist: Option<String>,

    /// HTML page settings
    pub html: Option<HtmlConfig>,

    /// Development server settings
    pub dev_server: Option<DevServerConfig>,
}

impl ProjectConfig {
    /// The declared kind, if it is one of the known kinds.
    ///
    /// Returns `None` both when `type` is absent and when it names
    /// something this tool does not know.
    pub fn kind(&self) -> Option<ProjectKind> {
        self.kind.as_deref().and_then(ProjectKind::parse)
    }

    /// The raw `type` tag as written.
    pub fn kind_tag(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(entry) = &self.entry {
            if entry.trim().is_empty() {
                return Err(ConfigError::InvalidValue("entry cannot be empty".into()));
            }
        }

        if let Some(dist) = &self.dist {
            if dist.trim().is_empty() {
                return Err(ConfigError::InvalidValue("dist cannot be empty".into()));
            }
        }

        if let Some(html) = &self.html {
            html.validate()?;
        }

        if let Some(dev_server) = &self.dev_server {
            dev_server.validate()?;
        }

        Ok(())
    }
}

/// HTML page settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Contents for `<title>`
    pub title: Option<String>,

    /// Id of the element the app renders into
    pub mount_id: Option<String>,
}

impl HtmlConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mount_id) = &self.mount_id {
            if mount_id.is_empty() || mount_id.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid html.mount_id '{}', must be a non-empty id without spaces",
                    mount_id
                )));
            }
        }
        Ok(())
    }
}

/// Development server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DevServerConfig {
    /// Hostname to bind
    pub host: Option<String>,

    /// Port to listen on
    pub port: Option<u16>,
}

impl DevServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            if host.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "dev_server.host cannot be empty".into(),
                ));
            }
        }
        if self.port == Some(0) {
            return Err(ConfigError::InvalidValue(
                "dev_server.port must be between 1 and 65535".into(),
            ));
        }
        Ok(())
    }
}
