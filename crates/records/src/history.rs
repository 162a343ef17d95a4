//! Read-only query seam between the persistence layer and the engines.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use garuda_core::VehicleId;

use crate::{FuelRecord, ServiceRecord, Vehicle};

/// Query interface the engines consume.
///
/// Return order of the history lists is unspecified; consumers that care about
/// ordering (e.g. "latest service") derive it themselves.
pub trait VehicleHistoryReader: Send + Sync {
    fn vehicle(&self, vehicle_id: VehicleId) -> Option<Vehicle>;
    fn vehicles(&self) -> Vec<Vehicle>;
    fn service_history(&self, vehicle_id: VehicleId) -> Vec<ServiceRecord>;
    fn fuel_history(&self, vehicle_id: VehicleId) -> Vec<FuelRecord>;
}

impl<S> VehicleHistoryReader for Arc<S>
where
    S: VehicleHistoryReader + ?Sized,
{
    fn vehicle(&self, vehicle_id: VehicleId) -> Option<Vehicle> {
        (**self).vehicle(vehicle_id)
    }

    fn vehicles(&self) -> Vec<Vehicle> {
        (**self).vehicles()
    }

    fn service_history(&self, vehicle_id: VehicleId) -> Vec<ServiceRecord> {
        (**self).service_history(vehicle_id)
    }

    fn fuel_history(&self, vehicle_id: VehicleId) -> Vec<FuelRecord> {
        (**self).fuel_history(vehicle_id)
    }
}

/// Flat export of every record, as loaded from a snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub service_records: Vec<ServiceRecord>,
    #[serde(default)]
    pub fuel_records: Vec<FuelRecord>,
}

#[derive(Debug, Default)]
struct Tables {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    services: BTreeMap<VehicleId, Vec<ServiceRecord>>,
    fuel: BTreeMap<VehicleId, Vec<FuelRecord>>,
}

/// In-memory reader for tests, demos and the report binary.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    inner: RwLock<Tables>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: HistorySnapshot) -> Self {
        let store = Self::new();
        for v in snapshot.vehicles {
            store.upsert_vehicle(v);
        }
        for s in snapshot.service_records {
            store.add_service(s);
        }
        for f in snapshot.fuel_records {
            store.add_fuel(f);
        }
        store
    }

    pub fn upsert_vehicle(&self, vehicle: Vehicle) {
        if let Ok(mut t) = self.inner.write() {
            t.vehicles.insert(vehicle.id, vehicle);
        }
    }

    pub fn add_service(&self, record: ServiceRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.services.entry(record.vehicle_id).or_default().push(record);
        }
    }

    pub fn add_fuel(&self, record: FuelRecord) {
        if let Ok(mut t) = self.inner.write() {
            t.fuel.entry(record.vehicle_id).or_default().push(record);
        }
    }
}

impl VehicleHistoryReader for InMemoryHistory {
    fn vehicle(&self, vehicle_id: VehicleId) -> Option<Vehicle> {
        let t = self.inner.read().ok()?;
        t.vehicles.get(&vehicle_id).cloned()
    }

    fn vehicles(&self) -> Vec<Vehicle> {
        match self.inner.read() {
            Ok(t) => t.vehicles.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn service_history(&self, vehicle_id: VehicleId) -> Vec<ServiceRecord> {
        match self.inner.read() {
            Ok(t) => t.services.get(&vehicle_id).cloned().unwrap_or_default(),
            Err(_) => vec![],
        }
    }

    fn fuel_history(&self, vehicle_id: VehicleId) -> Vec<FuelRecord> {
        match self.inner.read() {
            Ok(t) => t.fuel.get(&vehicle_id).cloned().unwrap_or_default(),
            Err(_) => vec![],
        }
    }
}
