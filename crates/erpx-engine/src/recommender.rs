//! Default recommendation rules and the analyses built on them.

use erpx_config::ThresholdsConfig;
use erpx_core::entities::{InventoryItem, Resource};
use erpx_core::enums::RuleType;
use erpx_core::responses::RuleOutcome;
use serde_json::{Value, json};

use crate::error::EngineError;
use crate::rules::{Rule, RuleContext, RuleEngine};

pub const INVENTORY_REORDER_ALERT: &str = "inventory_reorder_alert";
pub const RESOURCE_UTILIZATION_ALERT: &str = "resource_utilization_alert";
pub const COST_OPTIMIZATION: &str = "cost_optimization";
pub const CAPACITY_PLANNING: &str = "capacity_planning";

/// Runs the default and any custom rules over ERP records.
#[derive(Debug, Clone)]
pub struct DecisionRecommender {
    engine: RuleEngine,
    thresholds: ThresholdsConfig,
}

impl Default for DecisionRecommender {
    fn default() -> Self {
        Self::new(ThresholdsConfig::default())
    }
}

impl DecisionRecommender {
    /// Create a recommender with the four default rules tuned by `thresholds`.
    #[must_use]
    pub fn new(thresholds: ThresholdsConfig) -> Self {
        let mut engine = RuleEngine::new();
        engine.add_rule(reorder_rule(thresholds.reorder_multiplier));
        engine.add_rule(utilization_rule(thresholds.utilization_alert_pct));
        engine.add_rule(cost_rule(thresholds.cost_alert_ratio));
        engine.add_rule(capacity_rule(thresholds.capacity_alert_pct));
        Self { engine, thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdsConfig {
        &self.thresholds
    }

    #[must_use]
    pub const fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn add_custom_rule(&mut self, rule: Rule) {
        tracing::debug!(rule = %rule.name, priority = rule.priority, "adding custom rule");
        self.engine.add_rule(rule);
    }

    #[must_use]
    pub fn get_recommendations(&self, ctx: &RuleContext<'_>) -> Vec<RuleOutcome> {
        self.engine.execute_rules(ctx)
    }

    /// One pass per item.
    #[must_use]
    pub fn analyze_inventory(&self, items: &[InventoryItem]) -> Vec<RuleOutcome> {
        items
            .iter()
            .flat_map(|item| self.get_recommendations(&RuleContext::for_item(item)))
            .collect()
    }

    /// One pass per resource, then one pass over the whole set.
    #[must_use]
    pub fn analyze_resources(&self, resources: &[Resource]) -> Vec<RuleOutcome> {
        let mut outcomes: Vec<RuleOutcome> = resources
            .iter()
            .flat_map(|resource| self.get_recommendations(&RuleContext::for_resource(resource)))
            .collect();
        outcomes.extend(self.get_recommendations(&RuleContext::for_resources(resources)));
        outcomes
    }

    #[must_use]
    pub fn analyze_costs(&self, total_cost: f64, budget: f64) -> Vec<RuleOutcome> {
        self.get_recommendations(&RuleContext::for_costs(total_cost, budget))
    }
}

fn missing(rule: &str, fact: &str) -> EngineError {
    EngineError::rule_failed(rule, format!("context has no {fact}"))
}

fn reorder_rule(multiplier: i64) -> Rule {
    Rule::new(
        INVENTORY_REORDER_ALERT,
        RuleType::InventoryReorder,
        |ctx| ctx.inventory_item.is_some_and(InventoryItem::needs_reorder),
        move |ctx| {
            let item = ctx
                .inventory_item
                .ok_or_else(|| missing(INVENTORY_REORDER_ALERT, "inventory item"))?;
            let suggested = item.reorder_point.checked_mul(multiplier).ok_or_else(|| {
                EngineError::rule_failed(INVENTORY_REORDER_ALERT, "suggested quantity overflows")
            })?;
            Ok(json!({
                "recommendation": "Reorder inventory",
                "item": item.name,
                "current_quantity": item.quantity,
                "reorder_point": item.reorder_point,
                "suggested_quantity": suggested,
            }))
        },
    )
    .with_priority(8)
    .with_description("Alert when inventory needs reordering")
}

fn utilization_rule(alert_pct: f64) -> Rule {
    Rule::new(
        RESOURCE_UTILIZATION_ALERT,
        RuleType::ResourceAllocation,
        move |ctx| ctx.resource.is_some_and(|r| r.utilization > alert_pct),
        |ctx| {
            let resource = ctx
                .resource
                .ok_or_else(|| missing(RESOURCE_UTILIZATION_ALERT, "resource"))?;
            Ok(json!({
                "recommendation": "High resource utilization",
                "resource": resource.name,
                "current_utilization": resource.utilization,
                "suggestion": "Consider allocating additional resources",
            }))
        },
    )
    .with_priority(7)
    .with_description("Alert when resource utilization is high")
}

fn cost_rule(alert_ratio: f64) -> Rule {
    Rule::new(
        COST_OPTIMIZATION,
        RuleType::CostOptimization,
        move |ctx| match (ctx.total_cost, ctx.budget) {
            (Some(cost), Some(budget)) => budget > 0.0 && cost > budget * alert_ratio,
            _ => false,
        },
        |ctx| {
            let (Some(cost), Some(budget)) = (ctx.total_cost, ctx.budget) else {
                return Err(missing(COST_OPTIMIZATION, "cost figures"));
            };
            Ok(json!({
                "recommendation": "Cost threshold approaching",
                "current_cost": cost,
                "budget": budget,
                "utilization_percentage": cost / budget * 100.0,
                "suggestion": "Review spending and consider cost-saving measures",
            }))
        },
    )
    .with_priority(9)
    .with_description("Alert when costs approach budget limit")
}

fn capacity_rule(alert_pct: f64) -> Rule {
    Rule::new(
        CAPACITY_PLANNING,
        RuleType::CapacityPlanning,
        move |ctx| {
            ctx.resources
                .is_some_and(|rs| rs.iter().any(|r| r.utilization > alert_pct))
        },
        move |ctx| {
            let resources = ctx
                .resources
                .ok_or_else(|| missing(CAPACITY_PLANNING, "resource list"))?;
            let overutilized: Vec<Value> = resources
                .iter()
                .filter(|r| r.utilization > alert_pct)
                .map(|r| json!({"name": r.name, "utilization": r.utilization}))
                .collect();
            Ok(json!({
                "recommendation": "Capacity expansion needed",
                "overutilized_resources": overutilized,
                "suggestion": "Plan for capacity expansion or load balancing",
            }))
        },
    )
    .with_priority(8)
    .with_description("Alert when capacity planning is needed")
}
