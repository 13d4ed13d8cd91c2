use std::path::Path;

use anyhow::bail;
use erpx_core::responses::ValidationReport;
use erpx_schema::{SchemaError, SchemaRegistry, load_stack};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output::output;

/// Handle `erpx validate`. Prints the report, then fails when the document
/// does not conform.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = validate_file(&SchemaRegistry::new(), &args.file)?;
    output(&report, flags.format)?;

    if !report.valid {
        bail!(
            "{} is not a conforming stack document ({} problem(s))",
            report.path,
            report.errors.len()
        );
    }
    Ok(())
}

/// Check a file and describe the outcome. Unreadable files and unknown
/// extensions are errors rather than invalid reports.
fn validate_file(registry: &SchemaRegistry, path: &Path) -> anyhow::Result<ValidationReport> {
    let display = path.display().to_string();
    match load_stack(registry, path) {
        Ok(stack) => Ok(ValidationReport {
            path: display,
            valid: true,
            tech_choices: Some(stack.tech_choices().len()),
            errors: Vec::new(),
        }),
        Err(SchemaError::ValidationFailed { errors }) => Ok(ValidationReport {
            path: display,
            valid: false,
            tech_choices: None,
            errors,
        }),
        Err(error @ SchemaError::Parse { .. }) => Ok(ValidationReport {
            path: display,
            valid: false,
            tech_choices: None,
            errors: vec![error.to_string()],
        }),
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use erpx_schema::document::{self, DocumentFormat};
    use erpx_schema::templates::minimal_stack;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("tempfile should create");
        file.write_all(contents.as_bytes()).expect("write should succeed");
        file
    }

    #[test]
    fn conforming_toml_document_is_valid() {
        let text = document::render(&minimal_stack(), DocumentFormat::Toml).unwrap();
        let file = write_temp(".toml", &text);

        let report = validate_file(&SchemaRegistry::new(), file.path()).unwrap();
        assert!(report.valid);
        assert_eq!(report.tech_choices, Some(11));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn missing_fields_are_listed() {
        let file = write_temp(".json", r#"{"project_name": "ERPx"}"#);

        let report = validate_file(&SchemaRegistry::new(), file.path()).unwrap();
        assert!(!report.valid);
        assert_eq!(report.tech_choices, None);
        assert!(report.errors.iter().any(|e| e.contains("domain_focus")));
    }

    #[test]
    fn malformed_json_is_an_invalid_report() {
        let file = write_temp(".json", "{ not json");

        let report = validate_file(&SchemaRegistry::new(), file.path()).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = validate_file(&SchemaRegistry::new(), Path::new("/nonexistent/stack.json"));
        assert!(result.is_err());
    }
}
