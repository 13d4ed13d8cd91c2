//! Report and document types returned by the engine and printed by `erpx`.
//!
//! These structs define the shape of JSON output for `erpx status` and
//! `erpx recommend`, plus the snapshot document both commands read.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{InventoryItem, Resource, Transaction};
use crate::enums::RuleType;

/// A serialisable picture of an ERP system's records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ErpSnapshot {
    /// Overrides the configured company name when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Result of running one matching rule.
///
/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RuleOutcome {
    pub rule: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RuleOutcome {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Headline numbers accompanying a recommendation report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationSummary {
    pub total_recommendations: usize,
    pub critical_items: usize,
    pub overutilized_resources: usize,
    pub total_inventory_value: f64,
}

/// Response from `erpx recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationReport {
    pub inventory: Vec<RuleOutcome>,
    pub resources: Vec<RuleOutcome>,
    pub costs: Vec<RuleOutcome>,
    pub summary: RecommendationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourceTotals {
    pub total: usize,
    pub available: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InventoryTotals {
    pub total_items: usize,
    pub items_needing_reorder: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransactionTotals {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Response from `erpx status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SystemStatus {
    pub company: String,
    pub resources: ResourceTotals,
    pub inventory: InventoryTotals,
    pub transactions: TransactionTotals,
}

/// Response from `erpx validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub path: String,
    pub valid: bool,
    /// Number of technology choices found in a valid document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_choices: Option<usize>,
    #[serde(default)]
    pub errors: Vec<String>,
}
