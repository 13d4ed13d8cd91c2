use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CloudProvider;

use super::TechChoice;

/// The single deployment target of the product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CloudTarget {
    pub provider: CloudProvider,
    /// e.g. `us-east-1`, `us-central1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Reasoning for the chosen provider and region.
    pub reasoning: String,
}

/// Budget ceiling and cost-control tactics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostGuardrails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget_usd: Option<f64>,
    /// e.g. "autoscaling", "spot instances".
    pub cost_tactics: Vec<String>,
}

/// Authentication, secrets management, and security policies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SecurityOps {
    pub auth: TechChoice,
    pub secrets: TechChoice,
    /// e.g. "least privilege", "CIS baseline".
    pub policies: Vec<String>,
}

/// Logging, metrics, and tracing stack.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Observability {
    pub logging: TechChoice,
    pub metrics: TechChoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing: Option<TechChoice>,
    /// e.g. "Grafana: api-latency, error-rate".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboards: Option<Vec<String>>,
}

/// The `devops` section of the stack record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DevOps {
    /// e.g. "Docker", "Kubernetes", "Cloud Run".
    pub runtime: Vec<TechChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_as_code: Option<TechChoice>,
    pub deploy_target: CloudTarget,
    pub cost: CostGuardrails,
    pub observability: Observability,
    pub security: SecurityOps,
}
