//! Usage aggregates over a vehicle's service and fuel history.
//!
//! Pure reductions: no IO, no state, and empty inputs degrade to zero or
//! "no data" rather than failing.

pub mod fleet;
pub mod summary;

pub use fleet::{FleetRanking, RankedValue};
pub use summary::{UsageSummarizer, UsageSummary};
