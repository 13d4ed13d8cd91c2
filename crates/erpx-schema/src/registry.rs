//! Central schema registry for all ERPx types.
//!
//! The `SchemaRegistry` builds JSON Schemas from erpx-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Registry name of the stack decision record schema.
pub const STACK_SCHEMA: &str = "erpx_stack";

/// Registry name of the ERP snapshot document schema.
pub const SNAPSHOT_SCHEMA: &str = "erp_snapshot";

/// Central store of all JSON Schemas in the ERPx system.
///
/// Built from erpx-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all stack, entity, snapshot, and
    /// report schemas from erpx-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        use erpx_core::{entities, responses, stack};

        let mut schemas = HashMap::new();

        // --- Stack decision record (19) ---
        register!(schemas, STACK_SCHEMA, stack::ErpxStack);
        register!(schemas, "tech_choice", stack::TechChoice);
        register!(schemas, "tech_metric", stack::TechMetric);
        register!(schemas, "constraint_item", stack::ConstraintItem);
        register!(schemas, "operational_context", stack::OperationalContext);
        register!(schemas, "timeline_constraint", stack::TimelineConstraint);
        register!(schemas, "historical_decision", stack::HistoricalDecision);
        register!(schemas, "evaluation_criterion", stack::EvaluationCriterion);
        register!(schemas, "cloud_target", stack::CloudTarget);
        register!(schemas, "cost_guardrails", stack::CostGuardrails);
        register!(schemas, "security_ops", stack::SecurityOps);
        register!(schemas, "observability", stack::Observability);
        register!(schemas, "data_layer", stack::DataLayer);
        register!(schemas, "ai_module", stack::AiModule);
        register!(schemas, "dev_ex", stack::DevEx);
        register!(schemas, "testing_strategy", stack::TestingStrategy);
        register!(schemas, "nfrs", stack::Nfrs);
        register!(schemas, "risk_item", stack::RiskItem);
        register!(schemas, "dev_ops", stack::DevOps);

        // --- ERP entities (3) ---
        register!(schemas, "resource", entities::Resource);
        register!(schemas, "inventory_item", entities::InventoryItem);
        register!(schemas, "transaction", entities::Transaction);

        // --- Snapshot document (1) ---
        register!(schemas, SNAPSHOT_SCHEMA, responses::ErpSnapshot);

        // --- CLI response types (4) ---
        register!(schemas, "rule_outcome", responses::RuleOutcome);
        register!(
            schemas,
            "recommendation_report",
            responses::RecommendationReport
        );
        register!(schemas, "system_status", responses::SystemStatus);
        register!(schemas, "validation_report", responses::ValidationReport);

        tracing::debug!(count = schemas.len(), "schema registry built");
        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// Each error message is prefixed with the JSON pointer of the offending
    /// location (`/` for the document root).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                let path = if path.is_empty() { "/" } else { path.as_str() };
                format!("{path}: {e}")
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(schema = name, errors = errors.len(), "validation failed");
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
