use serde::{Deserialize, Serialize};

use garuda_core::{DomainError, DomainResult};

/// How often a maintenance item recurs.
///
/// Rules are caller configuration. They deserialize without checks so a single
/// bad entry in a rule file doesn't reject the whole set; [`validate`](Self::validate)
/// runs per rule when it is forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRule {
    pub item_type: String,
    /// Distance between services (odometer units, e.g. km).
    pub distance_interval: i64,
    /// Time between services, in 30-day months.
    pub months_interval: i64,
}

impl MaintenanceRule {
    pub fn new(item_type: impl Into<String>, distance_interval: i64, months_interval: i64) -> Self {
        Self {
            item_type: item_type.into(),
            distance_interval,
            months_interval,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.item_type.trim().is_empty() {
            return Err(DomainError::validation("item_type cannot be empty"));
        }
        if self.distance_interval <= 0 {
            return Err(DomainError::validation(format!(
                "{}: distance_interval must be > 0 (got {})",
                self.item_type, self.distance_interval
            )));
        }
        if self.months_interval <= 0 {
            return Err(DomainError::validation(format!(
                "{}: months_interval must be > 0 (got {})",
                self.item_type, self.months_interval
            )));
        }
        Ok(())
    }
}

/// Ordered list of maintenance rules.
///
/// Order is significant: batch forecasts come back in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<MaintenanceRule>);

impl RuleSet {
    pub fn new(rules: Vec<MaintenanceRule>) -> Self {
        Self(rules)
    }

    /// Parse a JSON array of `{item_type, distance_interval, months_interval}`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid rule set: {e}")))
    }

    pub fn rules(&self) -> &[MaintenanceRule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaintenanceRule> {
        self.0.iter()
    }
}

impl Default for RuleSet {
    /// Reference schedule: oil every 5000 km / 6 months, brake pads every
    /// 30000 km / 24 months, wipers every 20000 km / 18 months.
    fn default() -> Self {
        Self(vec![
            MaintenanceRule::new("Oil Change", 5_000, 6),
            MaintenanceRule::new("Brake Pads", 30_000, 24),
            MaintenanceRule::new("Wipers", 20_000, 18),
        ])
    }
}

impl From<Vec<MaintenanceRule>> for RuleSet {
    fn from(rules: Vec<MaintenanceRule>) -> Self {
        Self(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a MaintenanceRule;
    type IntoIter = std::slice::Iter<'a, MaintenanceRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
