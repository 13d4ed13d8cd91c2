//! Closed enumerations for the stack record and the ERP entities.
//!
//! Stack enums mirror the wire literals exactly (most are `snake_case`; cloud
//! providers and the project name keep their branded spelling). Status enums
//! with state machines provide `allowed_next_states()` to enforce valid
//! transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectName
// ---------------------------------------------------------------------------

/// The fixed project name literal. A stack document naming any other project
/// does not describe ERPx and is rejected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ProjectName {
    #[default]
    #[serde(rename = "ERPx")]
    Erpx,
}

impl ProjectName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Erpx => "ERPx",
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PriorityLevel
// ---------------------------------------------------------------------------

/// Relative importance of a technology choice or constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    MustHave,
    ShouldHave,
    NiceToHave,
}

impl PriorityLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MustHave => "must_have",
            Self::ShouldHave => "should_have",
            Self::NiceToHave => "nice_to_have",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AdoptionStatus
// ---------------------------------------------------------------------------

/// Whether a technology is in use, proposed, or on its way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionStatus {
    Current,
    Proposed,
    Deprecated,
}

impl AdoptionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Proposed => "proposed",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Maturity
// ---------------------------------------------------------------------------

/// Release maturity of a technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Experimental,
    Beta,
    Ga,
    Legacy,
}

impl Maturity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::Beta => "beta",
            Self::Ga => "ga",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExperienceLevel
// ---------------------------------------------------------------------------

/// Overall seniority of the delivery team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mixed,
    Senior,
}

impl ExperienceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mixed => "mixed",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CloudProvider
// ---------------------------------------------------------------------------

/// Deployment provider. Wire values keep the vendors' own spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "GCP")]
    Gcp,
    Azure,
    #[serde(rename = "Fly.io")]
    FlyIo,
    Vercel,
    Railway,
    Other,
}

impl CloudProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Gcp => "GCP",
            Self::Azure => "Azure",
            Self::FlyIo => "Fly.io",
            Self::Vercel => "Vercel",
            Self::Railway => "Railway",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PackageManager
// ---------------------------------------------------------------------------

/// JavaScript package manager used by the frontend toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tier of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceStatus
// ---------------------------------------------------------------------------

/// Operational status of an ERP resource.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    #[default]
    Available,
    Allocated,
    Maintenance,
    Retired,
}

impl ResourceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Allocated => "allocated",
            Self::Maintenance => "maintenance",
            Self::Retired => "retired",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Kind of an ERP transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Purchase,
    Sale,
    Transfer,
    Adjustment,
}

impl TransactionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TransactionStatus
// ---------------------------------------------------------------------------

/// Status of a transaction.
///
/// ```text
/// pending → completed
///         → cancelled
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RuleType
// ---------------------------------------------------------------------------

/// Category of a decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    ResourceAllocation,
    InventoryReorder,
    CostOptimization,
    CapacityPlanning,
}

impl RuleType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResourceAllocation => "resource_allocation",
            Self::InventoryReorder => "inventory_reorder",
            Self::CostOptimization => "cost_optimization",
            Self::CapacityPlanning => "capacity_planning",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(project_name_literal, ProjectName, ProjectName::Erpx, "ERPx");
    test_serde_roundtrip!(
        priority_nice_to_have,
        PriorityLevel,
        PriorityLevel::NiceToHave,
        "nice_to_have"
    );
    test_serde_roundtrip!(maturity_ga, Maturity, Maturity::Ga, "ga");
    test_serde_roundtrip!(provider_aws, CloudProvider, CloudProvider::Aws, "AWS");
    test_serde_roundtrip!(provider_fly, CloudProvider, CloudProvider::FlyIo, "Fly.io");
    test_serde_roundtrip!(provider_other, CloudProvider, CloudProvider::Other, "Other");
    test_serde_roundtrip!(package_manager_pnpm, PackageManager, PackageManager::Pnpm, "pnpm");
    test_serde_roundtrip!(
        rule_type_capacity,
        RuleType,
        RuleType::CapacityPlanning,
        "capacity_planning"
    );

    #[test]
    fn unknown_priority_rejected() {
        let result: Result<PriorityLevel, _> = serde_json::from_str("\"critical\"");
        assert!(result.is_err());
    }

    #[test]
    fn provider_spelling_is_exact() {
        // Lowercase vendor names are not part of the closed set.
        assert!(serde_json::from_str::<CloudProvider>("\"aws\"").is_err());
        assert!(serde_json::from_str::<CloudProvider>("\"Hetzner\"").is_err());
    }

    #[test]
    fn project_name_rejects_other_products() {
        assert!(serde_json::from_str::<ProjectName>("\"ERPy\"").is_err());
        assert!(serde_json::from_str::<ProjectName>("\"erpx\"").is_err());
    }

    // --- Transition tests ---

    #[test]
    fn transaction_valid_transitions() {
        assert!(TransactionStatus::Pending.can_transition_to(TransactionStatus::Completed));
        assert!(TransactionStatus::Pending.can_transition_to(TransactionStatus::Cancelled));
    }

    #[test]
    fn transaction_terminal_states() {
        assert!(TransactionStatus::Completed.allowed_next_states().is_empty());
        assert!(TransactionStatus::Cancelled.allowed_next_states().is_empty());
        assert!(!TransactionStatus::Cancelled.can_transition_to(TransactionStatus::Completed));
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ProjectName::Erpx), "ERPx");
        assert_eq!(format!("{}", PriorityLevel::MustHave), "must_have");
        assert_eq!(format!("{}", AdoptionStatus::Deprecated), "deprecated");
        assert_eq!(format!("{}", Maturity::Experimental), "experimental");
        assert_eq!(format!("{}", ExperienceLevel::Mixed), "mixed");
        assert_eq!(format!("{}", CloudProvider::FlyIo), "Fly.io");
        assert_eq!(format!("{}", PackageManager::Bun), "bun");
        assert_eq!(format!("{}", Severity::High), "high");
        assert_eq!(format!("{}", ResourceStatus::Maintenance), "maintenance");
        assert_eq!(format!("{}", TransactionType::Adjustment), "adjustment");
        assert_eq!(format!("{}", TransactionStatus::Cancelled), "cancelled");
        assert_eq!(format!("{}", RuleType::InventoryReorder), "inventory_reorder");
    }
}
