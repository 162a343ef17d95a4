use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use garuda_core::ServiceRecordId;

/// Where a projection is anchored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record_id", rename_all = "snake_case")]
pub enum AnchorSource {
    /// Latest matching service record.
    ServiceRecord(ServiceRecordId),
    /// No matching history: projected from today and the current odometer.
    CurrentState,
}

/// Next-due projection for one maintenance item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub item_type: String,
    pub anchor_date: NaiveDate,
    pub anchor_odometer: i64,
    pub anchor_source: AnchorSource,
    pub next_date: NaiveDate,
    pub next_odometer: i64,
}
