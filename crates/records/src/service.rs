use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use garuda_core::{ServiceRecordId, VehicleId};

/// A completed service event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceRecordId,
    pub vehicle_id: VehicleId,
    pub service_date: NaiveDate,
    pub odometer_at_service: i64,
    /// Free-text label matched against maintenance rule item types.
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labor_cost: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

impl ServiceRecord {
    pub fn new(
        id: ServiceRecordId,
        vehicle_id: VehicleId,
        service_date: NaiveDate,
        odometer_at_service: i64,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            service_date,
            odometer_at_service,
            service_type: None,
            description: None,
            labor_cost: None,
            total_cost: None,
        }
    }

    pub fn with_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn with_total_cost(mut self, total_cost: f64) -> Self {
        self.total_cost = Some(total_cost);
        self
    }

    /// Exact label comparison; unlabelled records match nothing.
    pub fn is_type(&self, item_type: &str) -> bool {
        self.service_type.as_deref() == Some(item_type)
    }
}
