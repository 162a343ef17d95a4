use serde::{Deserialize, Serialize};

use garuda_records::{FuelRecord, ServiceRecord};

/// Aggregate usage statistics for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub service_count: usize,
    pub total_service_cost: f64,
    pub total_fuel_cost: f64,
    /// Liters.
    pub total_fuel_volume: f64,
    pub fuel_record_count: usize,
    /// Distance per liter. `None` when no fuel volume is recorded, or the
    /// odometer span is out of range.
    ///
    /// A single fuel record yields `Some(0.0)`: the odometer span of one
    /// reading is zero. That is distinct from the no-data case.
    pub fuel_efficiency: Option<f64>,
}

impl UsageSummary {
    pub fn empty() -> Self {
        Self {
            service_count: 0,
            total_service_cost: 0.0,
            total_fuel_cost: 0.0,
            total_fuel_volume: 0.0,
            fuel_record_count: 0,
            fuel_efficiency: None,
        }
    }
}

/// Reduces a vehicle's history into a [`UsageSummary`].
#[derive(Debug, Default, Copy, Clone)]
pub struct UsageSummarizer;

impl UsageSummarizer {
    pub fn summarize(services: &[ServiceRecord], fuel: &[FuelRecord]) -> UsageSummary {
        let total_service_cost = services.iter().map(|s| s.total_cost.unwrap_or(0.0)).sum();
        let total_fuel_cost = fuel.iter().map(|f| f.total_cost.unwrap_or(0.0)).sum();
        let total_fuel_volume: f64 = fuel.iter().map(|f| f.liters.unwrap_or(0.0)).sum();

        let fuel_efficiency = if total_fuel_volume > 0.0 {
            odometer_span(fuel).map(|span| span as f64 / total_fuel_volume)
        } else {
            None
        };

        UsageSummary {
            service_count: services.len(),
            total_service_cost,
            total_fuel_cost,
            total_fuel_volume,
            fuel_record_count: fuel.len(),
            fuel_efficiency,
        }
    }
}

/// `max(odometer) - min(odometer)` over the fill-ups.
///
/// A span that doesn't fit in `i64` (corrupt readings) is treated as no data.
fn odometer_span(fuel: &[FuelRecord]) -> Option<i64> {
    let max = fuel.iter().map(|f| f.odometer).max()?;
    let min = fuel.iter().map(|f| f.odometer).min()?;
    max.checked_sub(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use garuda_core::{FuelRecordId, ServiceRecordId, VehicleId};
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn fill(vehicle_id: VehicleId, odometer: i64, liters: f64) -> FuelRecord {
        FuelRecord::new(FuelRecordId::new(), vehicle_id, day(1), odometer).with_liters(liters)
    }

    #[test]
    fn empty_history_has_zero_totals_and_no_efficiency() {
        let s = UsageSummarizer::summarize(&[], &[]);
        assert_eq!(s, UsageSummary::empty());
        assert_eq!(s.fuel_efficiency, None);
    }

    #[test]
    fn efficiency_is_odometer_span_over_total_volume() {
        let v = VehicleId::new();
        let s = UsageSummarizer::summarize(&[], &[fill(v, 1_400, 10.0), fill(v, 1_000, 10.0)]);
        assert_eq!(s.total_fuel_volume, 20.0);
        assert_eq!(s.fuel_efficiency, Some(20.0));
    }

    #[test]
    fn single_fill_is_zero_not_no_data() {
        let v = VehicleId::new();
        let s = UsageSummarizer::summarize(&[], &[fill(v, 1_000, 35.0)]);
        assert_eq!(s.fuel_efficiency, Some(0.0));
        assert_eq!(s.fuel_record_count, 1);
    }

    #[test]
    fn unrepresentable_odometer_span_gives_no_data() {
        let v = VehicleId::new();
        let s = UsageSummarizer::summarize(&[], &[fill(v, i64::MAX, 10.0), fill(v, -1, 10.0)]);
        assert_eq!(s.total_fuel_volume, 20.0);
        assert_eq!(s.fuel_efficiency, None);
    }

    #[test]
    fn fills_without_volume_give_no_data() {
        let v = VehicleId::new();
        let f = FuelRecord::new(FuelRecordId::new(), v, day(2), 5_000);
        let s = UsageSummarizer::summarize(&[], &[f.clone(), f]);
        assert_eq!(s.total_fuel_volume, 0.0);
        assert_eq!(s.fuel_efficiency, None);
    }

    #[test]
    fn missing_costs_count_as_zero() {
        let v = VehicleId::new();
        let services = vec![
            ServiceRecord::new(ServiceRecordId::new(), v, day(3), 100).with_total_cost(120.5),
            ServiceRecord::new(ServiceRecordId::new(), v, day(4), 200),
            ServiceRecord::new(ServiceRecordId::new(), v, day(5), 300).with_total_cost(79.5),
        ];
        let fuel = vec![
            FuelRecord::new(FuelRecordId::new(), v, day(6), 400).with_fill(40.0, 1.5, None),
            fill(v, 800, 30.0),
        ];

        let s = UsageSummarizer::summarize(&services, &fuel);

        assert_eq!(s.service_count, 3);
        assert_eq!(s.total_service_cost, 200.0);
        assert_eq!(s.total_fuel_cost, 60.0);
        assert_eq!(s.total_fuel_volume, 70.0);
    }

    #[test]
    fn summary_serializes_missing_efficiency_as_null() {
        let json = serde_json::to_value(UsageSummarizer::summarize(&[], &[])).unwrap();
        assert!(json["fuel_efficiency"].is_null());
        assert_eq!(json["service_count"], 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: volume is the sum of fills and efficiency is span / volume.
        #[test]
        fn aggregates_match_their_definitions(
            fills in prop::collection::vec((0i64..500_000, 1u32..80), 1..20)
        ) {
            let v = VehicleId::new();
            let fuel: Vec<FuelRecord> = fills
                .iter()
                .map(|(odo, liters)| fill(v, *odo, f64::from(*liters)))
                .collect();

            let s = UsageSummarizer::summarize(&[], &fuel);

            let volume: f64 = fills.iter().map(|(_, l)| f64::from(*l)).sum();
            let max = fills.iter().map(|(o, _)| *o).max().unwrap();
            let min = fills.iter().map(|(o, _)| *o).min().unwrap();

            prop_assert_eq!(s.total_fuel_volume, volume);
            prop_assert_eq!(s.fuel_efficiency, Some((max - min) as f64 / volume));
            prop_assert_eq!(s.fuel_record_count, fills.len());
            // Idempotent.
            prop_assert_eq!(UsageSummarizer::summarize(&[], &fuel), s);
        }
    }
}
