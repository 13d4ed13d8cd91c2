//! Schema, conformance, and document error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the schema registry and document loading.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// Document text could not be parsed in its declared format.
    #[error("Failed to parse {format} document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Document could not be rendered in the requested format.
    #[error("Failed to render {format} document: {message}")]
    Render {
        format: &'static str,
        message: String,
    },

    /// File extension does not map to a supported document format.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Document file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Individual validation messages, empty for non-validation errors.
    #[must_use]
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }
}
