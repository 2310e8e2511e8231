use ferrous_relay_domain::{DomainError, StatsSummary};
use std::time::Duration;

pub trait QueryStatsRecorder: Send + Sync {
    /// Called exactly once per completed query.
    fn record(&self, latency: Duration, cache_hit: bool, error: Option<&DomainError>);

    fn summary(&self) -> StatsSummary;
}
