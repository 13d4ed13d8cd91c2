//! Conformance checking of documents against the registered schemas.
//!
//! A document conforms when it passes JSON Schema validation and then
//! extracts into the typed record. Schema validation runs first so that all
//! problems are reported at once with their locations; typed extraction is
//! the final gate.

use std::path::Path;

use erpx_core::responses::ErpSnapshot;
use erpx_core::stack::ErpxStack;
use serde::de::DeserializeOwned;

use crate::document::read_value;
use crate::error::SchemaError;
use crate::registry::{SNAPSHOT_SCHEMA, STACK_SCHEMA, SchemaRegistry};

/// Validate `value` against the named schema, then extract it as `T`.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` listing every schema violation,
/// or a single-entry `ValidationFailed` if typed extraction still fails.
pub fn check<T: DeserializeOwned>(
    registry: &SchemaRegistry,
    schema: &str,
    value: serde_json::Value,
) -> Result<T, SchemaError> {
    registry.validate(schema, &value)?;
    serde_json::from_value(value).map_err(|e| SchemaError::ValidationFailed {
        errors: vec![format!("/: {e}")],
    })
}

/// Check a stack decision document.
///
/// # Errors
///
/// See [`check`].
pub fn check_stack(
    registry: &SchemaRegistry,
    value: serde_json::Value,
) -> Result<ErpxStack, SchemaError> {
    check(registry, STACK_SCHEMA, value)
}

/// Check an ERP snapshot document.
///
/// # Errors
///
/// See [`check`].
pub fn check_snapshot(
    registry: &SchemaRegistry,
    value: serde_json::Value,
) -> Result<ErpSnapshot, SchemaError> {
    check(registry, SNAPSHOT_SCHEMA, value)
}

/// Read and check a stack document from a `.json` or `.toml` file.
///
/// # Errors
///
/// Returns the read/parse errors of [`read_value`] or the errors of [`check`].
pub fn load_stack(registry: &SchemaRegistry, path: &Path) -> Result<ErpxStack, SchemaError> {
    let value = read_value(path)?;
    let stack = check_stack(registry, value).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "stack document rejected");
    })?;
    tracing::debug!(
        path = %path.display(),
        choices = stack.tech_choices().len(),
        "stack document accepted"
    );
    Ok(stack)
}

/// Read and check an ERP snapshot from a `.json` or `.toml` file.
///
/// # Errors
///
/// Returns the read/parse errors of [`read_value`] or the errors of [`check`].
pub fn load_snapshot(registry: &SchemaRegistry, path: &Path) -> Result<ErpSnapshot, SchemaError> {
    let value = read_value(path)?;
    check_snapshot(registry, value)
}
