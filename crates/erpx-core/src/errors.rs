//! Cross-cutting error types for ERPx.
//!
//! Domain-specific errors (e.g., `SchemaError`, `EngineError`) are defined in
//! their respective crates. The CLI converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any ERPx crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (range, sign, format).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity() {
        assert_eq!(
            CoreError::not_found("resource", "r404").to_string(),
            "Entity not found: resource r404"
        );
        let err = CoreError::InvalidTransition {
            entity_type: "transaction".into(),
            id: "t001".into(),
            from: "completed".into(),
            to: "cancelled".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid state transition: transaction t001 from completed to cancelled"
        );
    }
}
