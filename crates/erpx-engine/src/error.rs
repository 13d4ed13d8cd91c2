//! Engine error types.

use erpx_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A record operation failed (unknown id, bad value, invalid transition).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rule action could not produce its payload.
    #[error("Rule '{rule}' failed: {reason}")]
    RuleFailed { rule: String, reason: String },
}

impl EngineError {
    #[must_use]
    pub fn rule_failed(rule: &str, reason: impl Into<String>) -> Self {
        Self::RuleFailed {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}
