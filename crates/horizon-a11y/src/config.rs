//! Bridge configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! root_node_id = 1
//! root_label = "Editor"
//! log_notifications = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default label exported on the root container.
pub const DEFAULT_ROOT_LABEL: &str = "Application";

/// Configuration for a [`Bridge`](crate::Bridge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Identifier of the root container, supplied by the host.
    ///
    /// Node ids handed out to widgets never collide with it.
    pub root_node_id: u64,

    /// Accessible label of the root container.
    pub root_label: String,

    /// Trace every notification, including those that only reach a hook point.
    pub log_notifications: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            root_node_id: 0,
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            log_notifications: true,
        }
    }
}

impl BridgeConfig {
    /// Create a configuration with the given root container id.
    pub fn with_root(root_node_id: u64) -> Self {
        Self {
            root_node_id,
            ..Default::default()
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Serialize this configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.root_label.trim().is_empty() {
            return Err(Error::invalid_value(
                "root_label",
                "the root container needs a label",
            ));
        }
        Ok(())
    }
}
