use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AdoptionStatus, Maturity, PriorityLevel};

/// A reported or expected metric value: either a number or free text
/// (e.g. `"< 200"` or `"vendor quote pending"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One quantitative observation attached to a [`TechChoice`].
///
/// Metric names are not unique within a list; the same metric may be
/// recorded several times from different sources.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TechMetric {
    /// Metric name, e.g. `latency_p95_ms`.
    pub metric: String,
    pub value: MetricValue,
    /// Unit, e.g. `ms` or `USD/month`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Context or data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single technology selection with its justification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TechChoice {
    /// Technology name, e.g. `Next.js`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Rationale for the choice.
    pub why: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AdoptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityLevel>,
    /// Target score, intended range 0-100 (not enforced).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_score: Option<f64>,
    /// Estimated total cost of ownership in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tco_estimate_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<TechMetric>>,
    /// External references or benchmarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<String>>,
    /// Alternatives that were evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl TechChoice {
    /// A choice carrying only its two mandatory fields.
    #[must_use]
    pub fn new(name: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            why: why.into(),
            status: None,
            priority: None,
            desired_score: None,
            tco_estimate_usd: None,
            maturity: None,
            metrics: None,
            benchmarks: None,
            alternatives: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_are_omitted() {
        let choice = TechChoice::new("Redis", "hot cache");
        let json = serde_json::to_value(&choice).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("why"));
    }

    #[test]
    fn metric_value_accepts_number_or_text() {
        let numeric: TechMetric =
            serde_json::from_str(r#"{"metric":"latency_p95_ms","value":180}"#).unwrap();
        assert_eq!(numeric.value, MetricValue::Number(180.0));

        let text: TechMetric =
            serde_json::from_str(r#"{"metric":"sla","value":"99.9%","unit":"pct"}"#).unwrap();
        assert_eq!(text.value, MetricValue::from("99.9%"));
        assert_eq!(text.unit.as_deref(), Some("pct"));
    }

    #[test]
    fn missing_why_is_rejected() {
        let result: Result<TechChoice, _> = serde_json::from_str(r#"{"name":"Next.js"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_list_and_absent_list_stay_distinct() {
        let mut choice = TechChoice::new("Kafka", "event backbone");
        choice.alternatives = Some(Vec::new());

        let json = serde_json::to_string(&choice).unwrap();
        assert!(json.contains("\"alternatives\":[]"));
        let recovered: TechChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.alternatives, Some(Vec::new()));
        assert_eq!(recovered.benchmarks, None);
    }
}
