//! In-memory ERP system with integrated recommendations.

use erpx_config::ErpxConfig;
use erpx_core::entities::{InventoryItem, Resource, Transaction};
use erpx_core::enums::TransactionStatus;
use erpx_core::errors::CoreError;
use erpx_core::responses::{
    ErpSnapshot, InventoryTotals, RecommendationReport, RecommendationSummary, ResourceTotals,
    SystemStatus, TransactionTotals,
};

use crate::recommender::DecisionRecommender;
use crate::rules::Rule;

/// Resources, inventory, and transactions of one company.
///
/// Resources and inventory are keyed by id and keep insertion order; adding
/// a record whose id already exists replaces it in place. Transactions are
/// append-only.
#[derive(Debug, Clone)]
pub struct ErpSystem {
    company_name: String,
    budget_usd: f64,
    resources: Vec<Resource>,
    inventory: Vec<InventoryItem>,
    transactions: Vec<Transaction>,
    recommender: DecisionRecommender,
}

impl ErpSystem {
    /// Empty system using default budget and thresholds.
    #[must_use]
    pub fn new(company_name: impl Into<String>) -> Self {
        let defaults = ErpxConfig::default();
        Self {
            company_name: company_name.into(),
            budget_usd: defaults.general.budget_usd,
            resources: Vec::new(),
            inventory: Vec::new(),
            transactions: Vec::new(),
            recommender: DecisionRecommender::new(defaults.thresholds),
        }
    }

    /// Empty system configured from `config`.
    #[must_use]
    pub fn from_config(config: &ErpxConfig) -> Self {
        Self {
            company_name: config.general.company_name.clone(),
            budget_usd: config.general.budget_usd,
            resources: Vec::new(),
            inventory: Vec::new(),
            transactions: Vec::new(),
            recommender: DecisionRecommender::new(config.thresholds.clone()),
        }
    }

    /// Build a system from a snapshot. The snapshot's company name, when
    /// present, overrides the configured one.
    #[must_use]
    pub fn from_snapshot(snapshot: ErpSnapshot, config: &ErpxConfig) -> Self {
        let mut system = Self::from_config(config);
        if let Some(company_name) = snapshot.company_name {
            system.company_name = company_name;
        }
        for resource in snapshot.resources {
            system.add_resource(resource);
        }
        for item in snapshot.inventory {
            system.add_inventory_item(item);
        }
        system.transactions = snapshot.transactions;
        tracing::debug!(
            company = %system.company_name,
            resources = system.resources.len(),
            inventory = system.inventory.len(),
            transactions = system.transactions.len(),
            "loaded snapshot"
        );
        system
    }

    #[must_use]
    pub fn snapshot(&self) -> ErpSnapshot {
        ErpSnapshot {
            company_name: Some(self.company_name.clone()),
            resources: self.resources.clone(),
            inventory: self.inventory.clone(),
            transactions: self.transactions.clone(),
        }
    }

    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    #[must_use]
    pub const fn budget_usd(&self) -> f64 {
        self.budget_usd
    }

    #[must_use]
    pub const fn recommender(&self) -> &DecisionRecommender {
        &self.recommender
    }

    pub fn add_custom_rule(&mut self, rule: Rule) {
        self.recommender.add_custom_rule(rule);
    }

    // -----------------------------------------------------------------------
    // Resources
    // -----------------------------------------------------------------------

    pub fn add_resource(&mut self, resource: Resource) {
        match self.resources.iter_mut().find(|r| r.id == resource.id) {
            Some(existing) => *existing = resource,
            None => self.resources.push(resource),
        }
    }

    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` for an unknown id, `CoreError::Validation` for
    /// a value outside 0-100.
    pub fn update_resource_utilization(&mut self, id: &str, utilization: f64) -> Result<(), CoreError> {
        self.resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found("resource", id))?
            .update_utilization(utilization)
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    pub fn add_inventory_item(&mut self, item: InventoryItem) {
        match self.inventory.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.inventory.push(item),
        }
    }

    #[must_use]
    pub fn inventory_item(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == id)
    }

    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Apply a signed quantity change.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for an unknown id, `CoreError::Validation` if
    /// the quantity would go negative.
    pub fn update_inventory_quantity(&mut self, id: &str, change: i64) -> Result<(), CoreError> {
        self.inventory
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::not_found("inventory_item", id))?
            .update_quantity(change)
    }

    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions, or only those in `status`.
    #[must_use]
    pub fn transactions(&self, status: Option<TransactionStatus>) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .collect()
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` for an unknown id, `CoreError::InvalidTransition`
    /// unless the transaction is pending.
    pub fn complete_transaction(&mut self, id: &str) -> Result<(), CoreError> {
        self.transaction_mut(id)?.complete()
    }

    /// # Errors
    ///
    /// Same as [`Self::complete_transaction`].
    pub fn cancel_transaction(&mut self, id: &str) -> Result<(), CoreError> {
        self.transaction_mut(id)?.cancel()
    }

    fn transaction_mut(&mut self, id: &str) -> Result<&mut Transaction, CoreError> {
        self.transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found("transaction", id))
    }

    // -----------------------------------------------------------------------
    // Reports
    // -----------------------------------------------------------------------

    fn total_inventory_value(&self) -> f64 {
        self.inventory.iter().map(InventoryItem::calculate_value).sum()
    }

    /// Run every analysis over the current records.
    #[must_use]
    pub fn recommendations(&self) -> RecommendationReport {
        let inventory = self.recommender.analyze_inventory(&self.inventory);
        let resources = self.recommender.analyze_resources(&self.resources);
        let total_cost = self.total_inventory_value();
        let costs = self.recommender.analyze_costs(total_cost, self.budget_usd);

        let alert_pct = self.recommender.thresholds().utilization_alert_pct;
        let summary = RecommendationSummary {
            total_recommendations: inventory.len() + resources.len() + costs.len(),
            critical_items: self.inventory.iter().filter(|i| i.needs_reorder()).count(),
            overutilized_resources: self
                .resources
                .iter()
                .filter(|r| r.utilization > alert_pct)
                .count(),
            total_inventory_value: total_cost,
        };

        RecommendationReport {
            inventory,
            resources,
            costs,
            summary,
        }
    }

    #[must_use]
    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            company: self.company_name.clone(),
            resources: ResourceTotals {
                total: self.resources.len(),
                available: self.resources.iter().filter(|r| r.is_available()).count(),
            },
            inventory: InventoryTotals {
                total_items: self.inventory.len(),
                items_needing_reorder: self.inventory.iter().filter(|i| i.needs_reorder()).count(),
                total_value: self.total_inventory_value(),
            },
            transactions: TransactionTotals {
                total: self.transactions.len(),
                pending: self.transactions(Some(TransactionStatus::Pending)).len(),
                completed: self.transactions(Some(TransactionStatus::Completed)).len(),
            },
        }
    }
}
