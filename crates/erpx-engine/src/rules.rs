//! Condition/action rules and the engine that runs them.
//!
//! Rules are kept sorted by descending priority. Rules with equal priority
//! run in the order they were added.

use std::fmt;
use std::sync::Arc;

use erpx_core::entities::{InventoryItem, Resource};
use erpx_core::enums::RuleType;
use erpx_core::responses::RuleOutcome;
use serde_json::Value;

use crate::error::EngineError;

/// Priority given to rules that do not set one.
pub const DEFAULT_PRIORITY: i32 = 5;

/// Decides whether a rule applies to a context.
pub type ConditionFn = Arc<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Produces the payload of a matching rule.
pub type ActionFn = Arc<dyn Fn(&RuleContext<'_>) -> Result<Value, EngineError> + Send + Sync>;

/// The facts a rule is evaluated against. Every field is optional; rules
/// only fire on contexts carrying the facts they look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext<'a> {
    pub inventory_item: Option<&'a InventoryItem>,
    pub resource: Option<&'a Resource>,
    pub resources: Option<&'a [Resource]>,
    pub total_cost: Option<f64>,
    pub budget: Option<f64>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn for_item(item: &'a InventoryItem) -> Self {
        Self {
            inventory_item: Some(item),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_resource(resource: &'a Resource) -> Self {
        Self {
            resource: Some(resource),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_resources(resources: &'a [Resource]) -> Self {
        Self {
            resources: Some(resources),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_costs(total_cost: f64, budget: f64) -> Self {
        Self {
            total_cost: Some(total_cost),
            budget: Some(budget),
            ..Self::default()
        }
    }
}

/// A named business rule.
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub rule_type: RuleType,
    pub priority: i32,
    pub description: String,
    condition: ConditionFn,
    action: ActionFn,
}

impl Rule {
    pub fn new<C, A>(name: impl Into<String>, rule_type: RuleType, condition: C, action: A) -> Self
    where
        C: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
        A: Fn(&RuleContext<'_>) -> Result<Value, EngineError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            rule_type,
            priority: DEFAULT_PRIORITY,
            description: String::new(),
            condition: Arc::new(condition),
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the rule's condition holds for `ctx`.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> bool {
        (self.condition)(ctx)
    }

    /// Run the rule's action against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the action reports.
    pub fn execute(&self, ctx: &RuleContext<'_>) -> Result<Value, EngineError> {
        (self.action)(ctx)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("rule_type", &self.rule_type)
            .field("priority", &self.priority)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Evaluates and executes rules in priority order.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, keeping the list sorted by descending priority.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
        // stable: equal priorities keep insertion order
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Remove every rule called `name`. Returns how many were removed.
    pub fn remove_rule(&mut self, name: &str) -> usize {
        let before = self.rules.len();
        self.rules.retain(|r| r.name != name);
        before - self.rules.len()
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules whose condition holds for `ctx`, highest priority first.
    #[must_use]
    pub fn evaluate_rules(&self, ctx: &RuleContext<'_>) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.evaluate(ctx)).collect()
    }

    /// Execute every matching rule. A failing action yields an outcome with
    /// `error` set and does not stop the remaining rules.
    #[must_use]
    pub fn execute_rules(&self, ctx: &RuleContext<'_>) -> Vec<RuleOutcome> {
        self.evaluate_rules(ctx)
            .into_iter()
            .map(|rule| match rule.execute(ctx) {
                Ok(result) => {
                    tracing::debug!(rule = %rule.name, priority = rule.priority, "rule matched");
                    RuleOutcome {
                        rule: rule.name.clone(),
                        rule_type: rule.rule_type,
                        result: Some(result),
                        error: None,
                    }
                }
                Err(error) => {
                    tracing::warn!(rule = %rule.name, %error, "rule action failed");
                    RuleOutcome {
                        rule: rule.name.clone(),
                        rule_type: rule.rule_type,
                        result: None,
                        error: Some(error.to_string()),
                    }
                }
            })
            .collect()
    }
}
