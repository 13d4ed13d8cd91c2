//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_company_name() -> String {
    String::from("My Company")
}

/// Budget used for cost analysis when nothing else is configured.
const fn default_budget_usd() -> f64 {
    100_000.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Company name shown in system status reports.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Budget the inventory value is compared against.
    #[serde(default = "default_budget_usd")]
    pub budget_usd: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            budget_usd: default_budget_usd(),
        }
    }
}
