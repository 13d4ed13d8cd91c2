use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PackageManager;

use super::TechChoice;

/// The `dev_experience.testing` section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TestingStrategy {
    pub unit: TechChoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e2e: Option<TechChoice>,
    /// e.g. Pact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<TechChoice>,
}

/// Developer experience: repository layout, tooling, CI/CD, and testing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DevEx {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monorepo: Option<bool>,
    pub package_manager: PackageManager,
    /// e.g. "OpenAPI -> clients", "Prisma".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codegen: Option<Vec<String>>,
    /// e.g. "GitHub Actions".
    pub ci_cd: TechChoice,
    pub testing: TestingStrategy,
}

/// Non-functional requirement targets. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "NFRs")]
pub struct Nfrs {
    /// e.g. "99.9%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_slo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p50_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_p95_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retention_days: Option<f64>,
    /// e.g. "GDPR", "SOC2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<Vec<String>>,
    /// e.g. `["es-PA", "en-US"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_locales: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devex_requires_unit_testing_choice() {
        let json = r#"{
            "package_manager": "pnpm",
            "ci_cd": {"name": "GitHub Actions", "why": "hosted runners"},
            "testing": {"e2e": {"name": "Playwright", "why": "cross-browser"}}
        }"#;
        assert!(serde_json::from_str::<DevEx>(json).is_err());
    }

    #[test]
    fn devex_rejects_unknown_package_manager() {
        let json = r#"{
            "package_manager": "cargo",
            "ci_cd": {"name": "GitHub Actions", "why": "hosted runners"},
            "testing": {"unit": {"name": "Vitest", "why": "fast"}}
        }"#;
        assert!(serde_json::from_str::<DevEx>(json).is_err());
    }

    #[test]
    fn nfrs_accept_empty_object() {
        let nfrs: Nfrs = serde_json::from_str("{}").unwrap();
        assert_eq!(nfrs, Nfrs::default());
    }
}
