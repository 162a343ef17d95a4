//! Vehicle history records (read-only snapshots).
//!
//! These are the values the persistence layer hands to the forecasting and
//! usage engines. Nothing in this crate mutates stored state: it defines the
//! record shapes and the [`VehicleHistoryReader`] query seam.

pub mod fuel;
pub mod history;
pub mod service;
pub mod vehicle;

pub use fuel::FuelRecord;
pub use history::{HistorySnapshot, InMemoryHistory, VehicleHistoryReader};
pub use service::ServiceRecord;
pub use vehicle::Vehicle;
