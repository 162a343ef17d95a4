use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use garuda_core::FixedClock;
use garuda_dashboard::{DashboardService, ReportArgs, load_rules, load_snapshot};
use garuda_records::InMemoryHistory;

fn main() -> anyhow::Result<()> {
    garuda_observability::init();

    let args = ReportArgs::parse();

    let snapshot = load_snapshot(&args.snapshot)?;
    let rules = load_rules(args.rules.as_deref())?;

    tracing::info!(
        vehicles = snapshot.vehicles.len(),
        rules = rules.len(),
        "loaded snapshot"
    );

    let mut service = DashboardService::new(InMemoryHistory::from_snapshot(snapshot), rules);
    if let Some(day) = args.today {
        service = service.with_clock(Arc::new(FixedClock(day)));
    }

    let output = match args.vehicle {
        Some(id) => serde_json::to_string_pretty(&service.vehicle_report(id)?),
        None => serde_json::to_string_pretty(&service.fleet_report()),
    }
    .context("failed to serialize report")?;

    println!("{output}");
    Ok(())
}
