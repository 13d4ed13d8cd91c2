//! # erpx-engine
//!
//! Decision support for ERPx.
//!
//! - [`RuleEngine`]: prioritised condition/action rules evaluated against a [`RuleContext`]
//! - [`DecisionRecommender`]: the default inventory, utilization, cost, and capacity rules
//! - [`ErpSystem`]: in-memory resources, inventory, and transactions with
//!   recommendation and status reports

mod error;
pub mod recommender;
pub mod rules;
pub mod system;

pub use error::EngineError;
pub use recommender::DecisionRecommender;
pub use rules::{Rule, RuleContext, RuleEngine};
pub use system::ErpSystem;
