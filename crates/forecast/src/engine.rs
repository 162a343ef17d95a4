use chrono::{Days, NaiveDate};
use tracing::debug;

use garuda_core::{Clock, DomainError, DomainResult};
use garuda_records::{ServiceRecord, Vehicle};

use crate::result::{AnchorSource, ForecastResult};
use crate::rule::{MaintenanceRule, RuleSet};

/// Fixed month length used for time intervals.
///
/// Projections drift from calendar months by a day or two per interval.
/// Downstream consumers depend on the exact dates, so keep it at 30.
pub const DAYS_PER_MONTH: u64 = 30;

/// Next-due projection for maintenance items.
///
/// Model:
/// - Anchor on the latest service record of the rule's item type (ties broken
///   by the higher record id).
/// - Without such a record, anchor on `today` and the vehicle's current odometer.
/// - `next_date = anchor_date + months_interval * 30 days`,
///   `next_odometer = anchor_odometer + distance_interval`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ForecastEngine {
    today: NaiveDate,
}

impl ForecastEngine {
    /// Engine whose "from now" fallback anchors on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn with_clock(clock: &dyn Clock) -> Self {
        Self::new(clock.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Project the next occurrence of one maintenance item.
    ///
    /// Fails only for an invalid rule or a projection that leaves the
    /// representable date/odometer range.
    pub fn predict_next(
        &self,
        vehicle: &Vehicle,
        history: &[ServiceRecord],
        rule: &MaintenanceRule,
    ) -> DomainResult<ForecastResult> {
        rule.validate()?;

        let (anchor_date, anchor_odometer, anchor_source) =
            match latest_of_type(vehicle, history, &rule.item_type) {
                Some(last) => (
                    last.service_date,
                    last.odometer_at_service,
                    AnchorSource::ServiceRecord(last.id),
                ),
                None => (self.today, vehicle.current_odometer, AnchorSource::CurrentState),
            };

        // Validated positive above, so the casts are lossless.
        let days = (rule.months_interval as u64)
            .checked_mul(DAYS_PER_MONTH)
            .ok_or_else(|| out_of_range(rule, "months_interval"))?;
        let next_date = anchor_date
            .checked_add_days(Days::new(days))
            .ok_or_else(|| out_of_range(rule, "next_date"))?;
        let next_odometer = anchor_odometer
            .checked_add(rule.distance_interval)
            .ok_or_else(|| out_of_range(rule, "next_odometer"))?;

        debug!(
            vehicle_id = %vehicle.id,
            item_type = %rule.item_type,
            anchor = ?anchor_source,
            %next_date,
            next_odometer,
            "projected maintenance item"
        );

        Ok(ForecastResult {
            item_type: rule.item_type.clone(),
            anchor_date,
            anchor_odometer,
            anchor_source,
            next_date,
            next_odometer,
        })
    }

    /// One result per rule, in rule order.
    ///
    /// Rules are independent: an invalid rule yields an `Err` in its own slot
    /// and the remaining rules are still projected.
    pub fn forecast(
        &self,
        vehicle: &Vehicle,
        history: &[ServiceRecord],
        rules: &RuleSet,
    ) -> Vec<DomainResult<ForecastResult>> {
        rules
            .iter()
            .map(|rule| self.predict_next(vehicle, history, rule))
            .collect()
    }
}

/// Latest record of `item_type` for this vehicle, by (service_date, id).
fn latest_of_type<'a>(
    vehicle: &Vehicle,
    history: &'a [ServiceRecord],
    item_type: &str,
) -> Option<&'a ServiceRecord> {
    history
        .iter()
        .filter(|r| r.vehicle_id == vehicle.id && r.is_type(item_type))
        .max_by(|a, b| {
            a.service_date
                .cmp(&b.service_date)
                .then_with(|| a.id.cmp(&b.id))
        })
}

fn out_of_range(rule: &MaintenanceRule, what: &str) -> DomainError {
    DomainError::validation(format!("{}: {what} out of range", rule.item_type))
}
