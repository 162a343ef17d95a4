use serde::{Deserialize, Serialize};

use garuda_core::{GroupId, VehicleId};

/// Vehicle snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub group_id: GroupId,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub registration_no: Option<String>,
    /// Latest known odometer reading. Not checked for monotonicity here.
    #[serde(default)]
    pub current_odometer: i64,
}

impl Vehicle {
    pub fn new(id: VehicleId, group_id: GroupId, current_odometer: i64) -> Self {
        Self {
            id,
            group_id,
            brand: None,
            model: None,
            year: None,
            registration_no: None,
            current_odometer,
        }
    }

    /// "Brand Model", or the registration when make is unknown.
    pub fn display_name(&self) -> String {
        match (&self.brand, &self.model) {
            (Some(b), Some(m)) => format!("{b} {m}"),
            (Some(b), None) => b.clone(),
            (None, Some(m)) => m.clone(),
            (None, None) => self
                .registration_no
                .clone()
                .unwrap_or_else(|| self.id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_make() {
        let mut v = Vehicle::new(VehicleId::new(), GroupId::new(), 45_000);
        v.brand = Some("Toyota".to_string());
        v.model = Some("Camry".to_string());
        v.registration_no = Some("TEST-1234".to_string());
        assert_eq!(v.display_name(), "Toyota Camry");
    }

    #[test]
    fn display_name_falls_back_to_registration() {
        let mut v = Vehicle::new(VehicleId::new(), GroupId::new(), 0);
        v.registration_no = Some("TEST-1234".to_string());
        assert_eq!(v.display_name(), "TEST-1234");
    }

    #[test]
    fn odometer_defaults_to_zero_when_absent() {
        let json = format!(
            r#"{{"id":"{}","group_id":"{}"}}"#,
            VehicleId::new(),
            GroupId::new()
        );
        let v: Vehicle = serde_json::from_str(&json).unwrap();
        assert_eq!(v.current_odometer, 0);
    }
}
