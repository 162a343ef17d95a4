//! Cross-vehicle rankings for the fleet overview.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use garuda_core::VehicleId;

use crate::summary::UsageSummary;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedValue<T> {
    pub vehicle_id: VehicleId,
    pub value: T,
}

/// Fleet rankings, each sorted by value descending (ties: vehicle id ascending).
///
/// - `service_counts` / `service_costs`: vehicles with at least one service record.
/// - `fuel_costs`: vehicles with at least one fuel record.
/// - `fuel_efficiency`: vehicles with more than one fuel record and a measured
///   efficiency. Single fills are left out since their span is always zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetRanking {
    pub service_counts: Vec<RankedValue<usize>>,
    pub service_costs: Vec<RankedValue<f64>>,
    pub fuel_costs: Vec<RankedValue<f64>>,
    pub fuel_efficiency: Vec<RankedValue<f64>>,
}

impl FleetRanking {
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = (VehicleId, &'a UsageSummary)>,
    {
        let mut ranking = Self::default();

        for (vehicle_id, s) in summaries {
            if s.service_count > 0 {
                ranking.service_counts.push(RankedValue { vehicle_id, value: s.service_count });
                ranking.service_costs.push(RankedValue { vehicle_id, value: s.total_service_cost });
            }
            if s.fuel_record_count > 0 {
                ranking.fuel_costs.push(RankedValue { vehicle_id, value: s.total_fuel_cost });
            }
            if s.fuel_record_count > 1
                && let Some(value) = s.fuel_efficiency
            {
                ranking.fuel_efficiency.push(RankedValue { vehicle_id, value });
            }
        }

        sort_desc(&mut ranking.service_counts, Ord::cmp);
        sort_desc(&mut ranking.service_costs, f64::total_cmp);
        sort_desc(&mut ranking.fuel_costs, f64::total_cmp);
        sort_desc(&mut ranking.fuel_efficiency, f64::total_cmp);

        debug!(
            serviced = ranking.service_counts.len(),
            fuelled = ranking.fuel_costs.len(),
            with_efficiency = ranking.fuel_efficiency.len(),
            "built fleet ranking"
        );

        ranking
    }
}

fn sort_desc<T>(rows: &mut [RankedValue<T>], cmp: impl Fn(&T, &T) -> Ordering) {
    rows.sort_by(|a, b| cmp(&b.value, &a.value).then_with(|| a.vehicle_id.cmp(&b.vehicle_id)));
}
