//! Reading and writing documents as JSON or TOML.
//!
//! Documents are first parsed into an untyped `serde_json::Value` so the
//! conformance check can run the JSON Schema before any typed extraction,
//! regardless of the on-disk format.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::SchemaError;

/// On-disk format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (`.json` or `.toml`).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SchemaError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse document text into an untyped JSON value.
///
/// # Errors
///
/// Returns `SchemaError::Parse` if the text is not valid in `format`.
pub fn parse_value(text: &str, format: DocumentFormat) -> Result<serde_json::Value, SchemaError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| SchemaError::Parse {
            format: format.as_str(),
            message: e.to_string(),
        }),
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| SchemaError::Parse {
            format: format.as_str(),
            message: e.to_string(),
        }),
    }
}

/// Read a document file and parse it according to its extension.
///
/// # Errors
///
/// Returns `SchemaError::UnsupportedFormat`, `SchemaError::Io`, or
/// `SchemaError::Parse`.
pub fn read_value(path: &Path) -> Result<serde_json::Value, SchemaError> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, bytes = text.len(), "document read");
    parse_value(&text, format)
}

/// Render any serialisable document in the given format.
///
/// JSON output is pretty-printed; TOML output uses the pretty writer so
/// nested arrays stay readable.
///
/// # Errors
///
/// Returns `SchemaError::Render` if the value cannot be expressed in `format`.
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> Result<String, SchemaError> {
    match format {
        DocumentFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| SchemaError::Render {
                format: format.as_str(),
                message: e.to_string(),
            })
        }
        DocumentFormat::Toml => toml::to_string_pretty(value).map_err(|e| SchemaError::Render {
            format: format.as_str(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("stack.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("dir/stack.TOML")).unwrap(),
            DocumentFormat::Toml
        );
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = DocumentFormat::from_path(&PathBuf::from("stack.yaml")).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedFormat(ref ext) if ext == "yaml"));

        let err = DocumentFormat::from_path(&PathBuf::from("stack")).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedFormat(_)));
    }

    #[test]
    fn toml_parses_into_json_value() {
        let value = parse_value(
            "project_name = \"ERPx\"\ndomain_focus = [\"sales\"]\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(value["project_name"], "ERPx");
        assert_eq!(value["domain_focus"][0], "sales");
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = parse_value("{\"project_name\": ", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, SchemaError::Parse { format: "json", .. }));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = read_value(&PathBuf::from("/nonexistent/erpx/stack.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }
}
