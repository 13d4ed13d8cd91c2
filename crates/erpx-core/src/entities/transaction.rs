use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TransactionStatus, TransactionType};
use crate::errors::CoreError;

/// A monetary movement, optionally tied to a resource or inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_inventory_id: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default = "Utc::now")]
    #[schemars(transform = super::without_default)]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Transaction {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        transaction_type: TransactionType,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            transaction_type,
            amount,
            description: description.into(),
            related_resource_id: None,
            related_inventory_id: None,
            status: TransactionStatus::Pending,
            metadata: serde_json::Map::new(),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the transaction completed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless the transaction is pending.
    pub fn complete(&mut self) -> Result<(), CoreError> {
        self.transition(TransactionStatus::Completed)
    }

    /// Cancel the transaction.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless the transaction is pending.
    pub fn cancel(&mut self) -> Result<(), CoreError> {
        self.transition(TransactionStatus::Cancelled)
    }

    fn transition(&mut self, next: TransactionStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "transaction".to_string(),
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.completed_at = Some(Utc::now());
        Ok(())
    }
}
