//! Error types for the accessibility bridge.
//!
//! Notifications never fail: anything the bridge cannot apply is dropped with
//! a trace. These errors cover the surfaces around it, namely configuration
//! and accessibility action requests.

use std::path::PathBuf;

use accesskit::{Action, NodeId};
use horizon_a11y_core::{UnknownAccessibilityCode, WidgetId};

use crate::node::NodeKey;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the accessibility bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be parsed.
    #[error("Failed to parse bridge configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("Failed to serialize bridge configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read.
    #[error("Failed to read bridge configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration field holds an unusable value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// A raw accessibility code outside the enumeration was converted strictly.
    #[error(transparent)]
    UnknownCode(#[from] UnknownAccessibilityCode),

    /// An action targeted a node the bridge does not know.
    #[error("No accessible node with id {0:?}")]
    UnknownNode(NodeId),

    /// An action targeted a node that cannot be activated.
    #[error("Accessible node '{0}' cannot be activated")]
    NotActivatable(NodeKey),

    /// An action targeted a widget that has already been dropped.
    #[error("Widget {0} is no longer alive")]
    WidgetDropped(WidgetId),

    /// An action the bridge does not route.
    #[error("Unsupported accessibility action {0:?}")]
    UnsupportedAction(Action),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
