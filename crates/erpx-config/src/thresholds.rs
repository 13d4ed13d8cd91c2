//! Thresholds used by the default recommendation rules.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_utilization_alert_pct() -> f64 {
    80.0
}

const fn default_capacity_alert_pct() -> f64 {
    90.0
}

const fn default_cost_alert_ratio() -> f64 {
    0.8
}

const fn default_reorder_multiplier() -> i64 {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    /// A single resource above this utilization (percent) raises an alert.
    #[serde(default = "default_utilization_alert_pct")]
    pub utilization_alert_pct: f64,

    /// Any resource above this utilization (percent) calls for capacity planning.
    #[serde(default = "default_capacity_alert_pct")]
    pub capacity_alert_pct: f64,

    /// Spending above `budget * cost_alert_ratio` raises a cost alert.
    #[serde(default = "default_cost_alert_ratio")]
    pub cost_alert_ratio: f64,

    /// Suggested reorder quantity is `reorder_point * reorder_multiplier`.
    #[serde(default = "default_reorder_multiplier")]
    pub reorder_multiplier: i64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            utilization_alert_pct: default_utilization_alert_pct(),
            capacity_alert_pct: default_capacity_alert_pct(),
            cost_alert_ratio: default_cost_alert_ratio(),
            reorder_multiplier: default_reorder_multiplier(),
        }
    }
}

impl ThresholdsConfig {
    /// Check that every threshold is within its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, pct) in [
            ("thresholds.utilization_alert_pct", self.utilization_alert_pct),
            ("thresholds.capacity_alert_pct", self.capacity_alert_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(invalid(field, format!("{pct} is not a percentage (0-100)")));
            }
        }
        if !(self.cost_alert_ratio > 0.0 && self.cost_alert_ratio <= 1.0) {
            return Err(invalid(
                "thresholds.cost_alert_ratio",
                format!("{} must be in (0, 1]", self.cost_alert_ratio),
            ));
        }
        if self.reorder_multiplier < 1 {
            return Err(invalid(
                "thresholds.reorder_multiplier",
                format!("{} must be at least 1", self.reorder_multiplier),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ThresholdsConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.utilization_alert_pct - 80.0).abs() < f64::EPSILON);
        assert!((config.capacity_alert_pct - 90.0).abs() < f64::EPSILON);
        assert!((config.cost_alert_ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.reorder_multiplier, 2);
    }

    #[test]
    fn percentage_above_hundred_rejected() {
        let config = ThresholdsConfig {
            capacity_alert_pct: 120.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "thresholds.capacity_alert_pct")
        );
    }

    #[test]
    fn zero_cost_ratio_rejected() {
        let config = ThresholdsConfig {
            cost_alert_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_multiplier_rejected() {
        let config = ThresholdsConfig {
            reorder_multiplier: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
