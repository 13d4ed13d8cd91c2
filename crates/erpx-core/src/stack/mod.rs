//! The technology-stack decision record.
//!
//! A passive tree of records rooted at [`ErpxStack`]. Every struct derives
//! `Serialize`, `Deserialize`, and `JsonSchema` so documents can be exchanged
//! as JSON or TOML and checked against the generated schema.
//!
//! Optional fields are `Option<T>` and are omitted when absent (never written
//! as `null`). Optional lists are `Option<Vec<T>>` so that an absent list and
//! an empty list survive a round-trip unchanged. Documented ranges (weights in
//! 0-1, scores in 0-100) and ISO-8601 dates are descriptive only.

mod choice;
mod data;
mod devex;
mod planning;
mod platform;
mod root;

pub use choice::{MetricValue, TechChoice, TechMetric};
pub use data::{AiModule, DataLayer};
pub use devex::{DevEx, Nfrs, TestingStrategy};
pub use planning::{
    ConstraintItem, EvaluationCriterion, HistoricalDecision, OperationalContext, RiskItem,
    TimelineConstraint,
};
pub use platform::{CloudTarget, CostGuardrails, DevOps, Observability, SecurityOps};
pub use root::ErpxStack;
