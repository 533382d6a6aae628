//! Error types for TJS documents.

use tjs_core::XmlError;
use thiserror::Error;

/// Error type for document-level operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// XML reading or writing error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// Object model error.
    #[error("model error: {0}")]
    Model(#[from] tjs_core::Error),

    /// Root element is not a TJS global element.
    #[error("unknown root element '{name}'")]
    UnknownRoot {
        /// Local name of the root element.
        name: String,
    },

    /// Input contains no element.
    #[error("document has no root element")]
    EmptyDocument,

    /// Document violates a schema constraint.
    #[error("validation error at {path}: {message}")]
    Validation {
        /// Feature path from the root.
        path: String,
        /// Description of the violation.
        message: String,
    },
}

impl SchemaError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the schema error.
pub type Result<T> = std::result::Result<T, SchemaError>;
