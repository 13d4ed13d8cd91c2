use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const fn default_reorder_point() -> i64 {
    10
}

/// A stocked item. Reordering is due once `quantity` falls to the reorder point.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default = "default_reorder_point")]
    pub reorder_point: i64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default = "Utc::now")]
    #[schemars(transform = super::without_default)]
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity: 0,
            reorder_point: default_reorder_point(),
            unit_cost: 0.0,
            supplier: String::new(),
            location: String::new(),
            metadata: serde_json::Map::new(),
            last_updated: Utc::now(),
        }
    }

    #[must_use]
    pub const fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_point
    }

    /// Apply a signed stock movement.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the resulting quantity would be
    /// negative. The item is left unchanged in that case.
    pub fn update_quantity(&mut self, change: i64) -> Result<(), CoreError> {
        let next = self
            .quantity
            .checked_add(change)
            .filter(|q| *q >= 0)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "quantity cannot be negative ({} {change:+})",
                    self.quantity
                ))
            })?;
        self.quantity = next;
        self.last_updated = Utc::now();
        Ok(())
    }

    /// Stock value: quantity times unit cost.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_value(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }
}
