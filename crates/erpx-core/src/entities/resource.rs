use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ResourceStatus;
use crate::errors::CoreError;

const fn default_capacity() -> f64 {
    100.0
}

/// A schedulable enterprise resource (machine, team, vehicle, room...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default = "default_capacity")]
    pub capacity: f64,
    /// Utilization percentage, 0-100.
    #[serde(default)]
    pub utilization: f64,
    #[serde(default)]
    pub cost_per_unit: f64,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default = "Utc::now")]
    #[schemars(transform = super::without_default)]
    pub created_at: DateTime<Utc>,
}

impl Resource {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resource_type: resource_type.into(),
            status: ResourceStatus::default(),
            capacity: default_capacity(),
            utilization: 0.0,
            cost_per_unit: 0.0,
            metadata: serde_json::Map::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the utilization percentage.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `utilization` is outside 0-100.
    pub fn update_utilization(&mut self, utilization: f64) -> Result<(), CoreError> {
        if !(0.0..=100.0).contains(&utilization) {
            return Err(CoreError::Validation(format!(
                "utilization must be between 0 and 100, got {utilization}"
            )));
        }
        self.utilization = utilization;
        Ok(())
    }

    /// Available means status `available` with headroom left.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == ResourceStatus::Available && self.utilization < self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_resource_defaults() {
        let resource = Resource::new("r001", "CNC Mill", "machine");
        assert_eq!(resource.status, ResourceStatus::Available);
        assert!((resource.capacity - 100.0).abs() < f64::EPSILON);
        assert!(resource.utilization.abs() < f64::EPSILON);
        assert!(resource.is_available());
    }

    #[test]
    fn utilization_bounds_are_inclusive() {
        let mut resource = Resource::new("r001", "CNC Mill", "machine");
        assert!(resource.update_utilization(0.0).is_ok());
        assert!(resource.update_utilization(100.0).is_ok());
        assert!((resource.utilization - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn utilization_out_of_range_is_rejected() {
        let mut resource = Resource::new("r001", "CNC Mill", "machine");
        resource.update_utilization(42.0).unwrap();

        let err = resource.update_utilization(150.0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(resource.update_utilization(-1.0).is_err());
        // Failed updates leave the previous value in place.
        assert!((resource.utilization - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_or_non_available_resource_is_not_available() {
        let mut resource = Resource::new("r001", "CNC Mill", "machine");
        resource.update_utilization(100.0).unwrap();
        assert!(!resource.is_available());

        let mut idle = Resource::new("r002", "Lathe", "machine");
        idle.status = ResourceStatus::Maintenance;
        assert!(!idle.is_available());
    }

    #[test]
    fn type_field_uses_wire_name() {
        let json = serde_json::to_value(Resource::new("r001", "Forklift", "vehicle")).unwrap();
        assert_eq!(json["type"], "vehicle");
        assert!(json.get("resource_type").is_none());
    }
}
