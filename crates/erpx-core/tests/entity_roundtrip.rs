//! Serde roundtrip and JsonSchema validation tests for entity and report types.

use chrono::Utc;
use schemars::schema_for;
use erpx_core::entities::*;
use erpx_core::enums::*;
use erpx_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    resource_roundtrip,
    Resource,
    Resource {
        id: "r001".into(),
        name: "Assembly line A".into(),
        resource_type: "production".into(),
        status: ResourceStatus::Allocated,
        capacity: 100.0,
        utilization: 85.5,
        cost_per_unit: 12.0,
        metadata: serde_json::json!({"shift": "night"})
            .as_object()
            .cloned()
            .unwrap(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    inventory_item_roundtrip,
    InventoryItem,
    InventoryItem {
        id: "i001".into(),
        name: "Steel bolts M8".into(),
        category: "fasteners".into(),
        quantity: 8,
        reorder_point: 10,
        unit_cost: 0.12,
        supplier: "Acme Supply".into(),
        location: "Bin 14".into(),
        metadata: serde_json::Map::new(),
        last_updated: Utc::now(),
    }
);

roundtrip_and_validate!(
    transaction_roundtrip,
    Transaction,
    Transaction {
        related_inventory_id: Some("i001".into()),
        ..Transaction::new("t001", TransactionType::Purchase, 240.0, "Restock bolts")
    }
);

roundtrip_and_validate!(
    completed_transaction_roundtrip,
    Transaction,
    {
        let mut tx = Transaction::new("t002", TransactionType::Sale, 99.0, "Counter sale");
        tx.complete().unwrap();
        tx
    }
);

roundtrip_and_validate!(
    snapshot_roundtrip,
    ErpSnapshot,
    ErpSnapshot {
        company_name: Some("Test Corp".into()),
        resources: vec![Resource::new("r001", "Forklift", "vehicle")],
        inventory: vec![InventoryItem::new("i001", "Pallets", "logistics")],
        transactions: vec![Transaction::new(
            "t001",
            TransactionType::Transfer,
            0.0,
            "Move pallets"
        )],
    }
);

roundtrip_and_validate!(
    recommendation_report_roundtrip,
    RecommendationReport,
    RecommendationReport {
        inventory: vec![RuleOutcome {
            rule: "inventory_reorder_alert".into(),
            rule_type: RuleType::InventoryReorder,
            result: Some(serde_json::json!({"recommendation": "Reorder inventory"})),
            error: None,
        }],
        resources: Vec::new(),
        costs: vec![RuleOutcome {
            rule: "cost_optimization".into(),
            rule_type: RuleType::CostOptimization,
            result: None,
            error: Some("budget unavailable".into()),
        }],
        summary: RecommendationSummary {
            total_recommendations: 2,
            critical_items: 1,
            overutilized_resources: 0,
            total_inventory_value: 0.96,
        },
    }
);

roundtrip_and_validate!(
    system_status_roundtrip,
    SystemStatus,
    SystemStatus {
        company: "Test Corp".into(),
        resources: ResourceTotals {
            total: 2,
            available: 1,
        },
        inventory: InventoryTotals {
            total_items: 3,
            items_needing_reorder: 1,
            total_value: 1250.0,
        },
        transactions: TransactionTotals {
            total: 4,
            pending: 3,
            completed: 1,
        },
    }
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ValidationReport,
    ValidationReport {
        path: "stack.json".into(),
        valid: false,
        tech_choices: None,
        errors: vec!["/data: \"primary_db\" is a required property".into()],
    }
);

#[test]
fn snapshot_accepts_empty_document() {
    let snapshot: ErpSnapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, ErpSnapshot::default());
}

#[test]
fn transaction_rejects_unknown_type() {
    let json = r#"{"id":"t1","type":"refund","amount":10.0,"description":"x"}"#;
    assert!(serde_json::from_str::<Transaction>(json).is_err());
}
