use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use garuda_core::DomainResult;
use garuda_forecast::ForecastResult;
use garuda_records::Vehicle;
use garuda_usage::{FleetRanking, UsageSummary};

/// One slot of a vehicle's forecast list, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastEntry {
    Projected(ForecastResult),
    /// The rule was invalid; the other entries are unaffected.
    Rejected { item_type: String, error: String },
}

impl ForecastEntry {
    pub fn from_outcome(item_type: &str, outcome: DomainResult<ForecastResult>) -> Self {
        match outcome {
            Ok(f) => Self::Projected(f),
            Err(e) => Self::Rejected {
                item_type: item_type.to_string(),
                error: e.to_string(),
            },
        }
    }

    pub fn item_type(&self) -> &str {
        match self {
            Self::Projected(f) => &f.item_type,
            Self::Rejected { item_type, .. } => item_type,
        }
    }

    pub fn projected(&self) -> Option<&ForecastResult> {
        match self {
            Self::Projected(f) => Some(f),
            Self::Rejected { .. } => None,
        }
    }
}

/// Vehicle detail view: usage summary + maintenance forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleReport {
    /// Display name: "Brand Model", else the registration.
    pub label: String,
    pub vehicle: Vehicle,
    pub summary: UsageSummary,
    pub forecasts: Vec<ForecastEntry>,
}

/// Every vehicle's report plus cross-vehicle rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetReport {
    pub generated_on: NaiveDate,
    pub vehicles: Vec<VehicleReport>,
    pub ranking: FleetRanking,
}

#[cfg(test)]
mod tests {
    use super::*;
    use garuda_core::DomainError;
    use garuda_forecast::AnchorSource;

    #[test]
    fn rejected_entry_serializes_with_status_tag() {
        let entry = ForecastEntry::from_outcome(
            "Coolant",
            Err(DomainError::validation("Coolant: months_interval must be > 0 (got 0)")),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["item_type"], "Coolant");
        assert!(json["error"].as_str().unwrap().contains("months_interval"));
        assert!(entry.projected().is_none());
    }

    #[test]
    fn projected_entry_flattens_forecast_fields() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entry = ForecastEntry::Projected(ForecastResult {
            item_type: "Oil Change".to_string(),
            anchor_date: d,
            anchor_odometer: 10,
            anchor_source: AnchorSource::CurrentState,
            next_date: d,
            next_odometer: 20,
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "projected");
        assert_eq!(json["next_odometer"], 20);
        assert_eq!(json["anchor_source"]["kind"], "current_state");
        assert_eq!(entry.item_type(), "Oil Change");
    }
}
