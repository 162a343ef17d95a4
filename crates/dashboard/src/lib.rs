//! `garuda-dashboard` — composes the engines into per-vehicle and fleet reports.
//!
//! Records come in through a [`VehicleHistoryReader`](garuda_records::VehicleHistoryReader);
//! reports go out as plain serializable values for whatever renders them.

pub mod config;
pub mod report;
pub mod service;

pub use config::{ReportArgs, load_rules, load_snapshot};
pub use report::{FleetReport, ForecastEntry, VehicleReport};
pub use service::DashboardService;
