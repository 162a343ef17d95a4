//! Command-line/env configuration and file loading for `garuda-report`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use garuda_core::VehicleId;
use garuda_forecast::RuleSet;
use garuda_records::HistorySnapshot;

#[derive(Debug, Clone, Parser)]
#[command(name = "garuda-report", about = "Vehicle usage summaries and maintenance forecasts")]
pub struct ReportArgs {
    /// JSON snapshot with `vehicles`, `service_records` and `fuel_records`.
    #[arg(long, env = "GARUDA_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// JSON rule file; the reference schedule is used when absent.
    #[arg(long, env = "GARUDA_RULES")]
    pub rules: Option<PathBuf>,

    /// Report a single vehicle instead of the whole fleet.
    #[arg(long)]
    pub vehicle: Option<VehicleId>,

    /// Pin "today" (YYYY-MM-DD) for reproducible output.
    #[arg(long, env = "GARUDA_TODAY")]
    pub today: Option<NaiveDate>,
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<HistorySnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse snapshot {}", path.display()))
}

pub fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleSet> {
    let Some(path) = path else {
        return Ok(RuleSet::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules {}", path.display()))?;
    RuleSet::from_json(&raw).with_context(|| format!("failed to parse rules {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_rule_path_uses_reference_schedule() {
        assert_eq!(load_rules(None).unwrap(), RuleSet::default());
    }

    #[test]
    fn rule_file_replaces_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"item_type": "Timing Belt", "distance_interval": 100000, "months_interval": 60}}]"#
        )
        .unwrap();

        let rules = load_rules(Some(file.path())).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rules()[0].item_type, "Timing Belt");
    }

    #[test]
    fn unreadable_snapshot_names_the_path() {
        let err = load_snapshot(Path::new("/nonexistent/garuda.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/garuda.json"));
    }

    #[test]
    fn args_parse_vehicle_and_today() {
        let id = VehicleId::new();
        let id_arg = id.to_string();
        let args = ReportArgs::try_parse_from([
            "garuda-report",
            "--snapshot",
            "fleet.json",
            "--vehicle",
            id_arg.as_str(),
            "--today",
            "2024-01-01",
        ])
        .unwrap();
        assert_eq!(args.vehicle, Some(id));
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 1, 1));
    }
}
