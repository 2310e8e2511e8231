use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest TTL a response may be stored for; matches the positive range of a DNS TTL.
pub const MAX_TTL_SECS: i64 = i32::MAX as i64;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Applied to every stored response. Zero or negative disables storing.
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: i64,

    #[serde(default = "default_compaction_interval_secs")]
    pub compaction_interval_secs: u64,
}

impl CacheConfig {
    pub fn compaction_interval(&self) -> Duration {
        Duration::from_secs(self.compaction_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            default_ttl_secs: default_ttl_secs(),
            compaction_interval_secs: default_compaction_interval_secs(),
        }
    }
}

fn default_max_entries() -> usize {
    10_000
}

fn default_ttl_secs() -> i64 {
    300
}

fn default_compaction_interval_secs() -> u64 {
    60
}
