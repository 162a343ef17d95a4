use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use garuda_core::{Clock, DomainError, DomainResult, SystemClock, VehicleId};
use garuda_forecast::{ForecastEngine, RuleSet};
use garuda_records::{Vehicle, VehicleHistoryReader};
use garuda_usage::{FleetRanking, UsageSummarizer};

use crate::report::{FleetReport, ForecastEntry, VehicleReport};

/// Read-side service behind the vehicle detail and fleet pages.
///
/// Stateless apart from its collaborators; safe to share across requests.
pub struct DashboardService<R> {
    reader: R,
    rules: RuleSet,
    clock: Arc<dyn Clock>,
}

impl<R: VehicleHistoryReader> DashboardService<R> {
    /// Service projecting against the system clock.
    pub fn new(reader: R, rules: RuleSet) -> Self {
        Self {
            reader,
            rules,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock, e.g. to pin "today" for reproducible reports.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[instrument(skip_all, fields(vehicle_id = %vehicle_id))]
    pub fn vehicle_report(&self, vehicle_id: VehicleId) -> DomainResult<VehicleReport> {
        let vehicle = self
            .reader
            .vehicle(vehicle_id)
            .ok_or_else(|| DomainError::not_found(format!("vehicle {vehicle_id}")))?;
        Ok(self.report_for(vehicle, self.clock.today()))
    }

    /// Reports for every vehicle, all projected against the same "today".
    #[instrument(skip_all)]
    pub fn fleet_report(&self) -> FleetReport {
        let today = self.clock.today();
        let vehicles: Vec<VehicleReport> = self
            .reader
            .vehicles()
            .into_iter()
            .map(|v| self.report_for(v, today))
            .collect();

        let ranking =
            FleetRanking::from_summaries(vehicles.iter().map(|r| (r.vehicle.id, &r.summary)));

        info!(vehicles = vehicles.len(), %today, "fleet report built");

        FleetReport {
            generated_on: today,
            vehicles,
            ranking,
        }
    }

    fn report_for(&self, vehicle: Vehicle, today: NaiveDate) -> VehicleReport {
        let services = self.reader.service_history(vehicle.id);
        let fuel = self.reader.fuel_history(vehicle.id);

        let summary = UsageSummarizer::summarize(&services, &fuel);

        let engine = ForecastEngine::new(today);
        let forecasts = self
            .rules
            .iter()
            .zip(engine.forecast(&vehicle, &services, &self.rules))
            .map(|(rule, outcome)| {
                if let Err(e) = &outcome {
                    warn!(vehicle_id = %vehicle.id, item_type = %rule.item_type, "forecast rejected: {e}");
                }
                ForecastEntry::from_outcome(&rule.item_type, outcome)
            })
            .collect();

        VehicleReport {
            label: vehicle.display_name(),
            vehicle,
            summary,
            forecasts,
        }
    }
}
