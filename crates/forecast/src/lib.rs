//! `garuda-forecast`
//!
//! **Responsibility:** project when each maintenance item is next due.
//!
//! - Pure: consumes record snapshots, never touches storage.
//! - Deterministic: "today" is injected, so identical inputs give identical output.
//! - Months are approximated as 30 days. Calendar-month arithmetic is not used.

pub mod engine;
pub mod result;
pub mod rule;

pub use engine::{DAYS_PER_MONTH, ForecastEngine};
pub use result::{AnchorSource, ForecastResult};
pub use rule::{MaintenanceRule, RuleSet};
