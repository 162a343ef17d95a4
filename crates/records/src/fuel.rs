use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use garuda_core::{FuelRecordId, VehicleId};

/// A fuel fill-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub id: FuelRecordId,
    pub vehicle_id: VehicleId,
    pub date: NaiveDate,
    /// Odometer reading at the fill.
    pub odometer: i64,
    #[serde(default)]
    pub liters: Option<f64>,
    #[serde(default)]
    pub price_per_liter: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
}

impl FuelRecord {
    pub fn new(id: FuelRecordId, vehicle_id: VehicleId, date: NaiveDate, odometer: i64) -> Self {
        Self {
            id,
            vehicle_id,
            date,
            odometer,
            liters: None,
            price_per_liter: None,
            total_cost: None,
            fuel_type: None,
            station_name: None,
        }
    }

    /// Record a fill as entered at the pump.
    ///
    /// When no total was entered, the stored total is `liters * price`
    /// rounded to cents.
    pub fn with_fill(mut self, liters: f64, price_per_liter: f64, total_cost: Option<f64>) -> Self {
        self.liters = Some(liters);
        self.price_per_liter = Some(price_per_liter);
        self.total_cost = Some(total_cost.unwrap_or_else(|| round_cents(liters * price_per_liter)));
        self
    }

    pub fn with_liters(mut self, liters: f64) -> Self {
        self.liters = Some(liters);
        self
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FuelRecord {
        FuelRecord::new(
            FuelRecordId::new(),
            VehicleId::new(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            12_000,
        )
    }

    #[test]
    fn missing_total_is_derived_and_rounded() {
        let r = record().with_fill(41.3, 1.879, None);
        assert_eq!(r.total_cost, Some(77.6));
    }

    #[test]
    fn entered_total_wins() {
        let r = record().with_fill(40.0, 2.0, Some(75.5));
        assert_eq!(r.total_cost, Some(75.5));
    }

    #[test]
    fn liters_only_leaves_cost_unset() {
        let r = record().with_liters(10.0);
        assert_eq!(r.liters, Some(10.0));
        assert_eq!(r.total_cost, None);
    }
}
