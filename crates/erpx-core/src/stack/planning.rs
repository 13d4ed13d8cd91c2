use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ExperienceLevel, PriorityLevel, Severity};

/// A requirement the stack has to satisfy, with an explicit priority tier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConstraintItem {
    /// e.g. "Offline support for sales".
    pub description: String,
    pub priority: PriorityLevel,
    /// Relative weight, intended range 0-1 (not enforced).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// Snapshot of team and business reality informing the decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OperationalContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_experience_level: Option<ExperienceLevel>,
    /// Primary languages used by the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_budget_usd: Option<f64>,
    /// Percentage of outsourced work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outsourcing_ratio: Option<f64>,
    /// Mandated SLAs or regulations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulated_slas: Option<Vec<String>>,
    /// e.g. "HIPAA", "PCI".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_segments: Option<Vec<String>>,
}

/// One milestone on the delivery timeline.
///
/// Dates are ISO-8601 strings and are carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimelineConstraint {
    /// e.g. "MVP", "Scaling".
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Risks or dependencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A prior decision and what came of it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoricalDecision {
    /// e.g. "Adopt PostgreSQL".
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    /// Key learnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A weighted axis used to rank competing technology options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationCriterion {
    /// e.g. "Annual TCO".
    pub name: String,
    /// Relative weight, intended range 0-1 (not enforced).
    pub weight: f64,
    /// Target threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// How to measure it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project risk and its mitigation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskItem {
    pub item: String,
    pub mitigation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// e.g. `["finance", "logistics"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impacted_domains: Option<Vec<String>>,
}
