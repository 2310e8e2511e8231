use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_report_interval_secs")]
    pub report_interval_secs: u64,
}

impl StatsConfig {
    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            report_interval_secs: default_report_interval_secs(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_report_interval_secs() -> u64 {
    30
}
