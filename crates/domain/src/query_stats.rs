use std::fmt;
use std::time::Duration;

/// Point-in-time view of the query counters and the latency window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsSummary {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub errors: u64,
    /// `cache_hits / total_queries`, or 0 before the first query.
    pub hit_rate: f64,
    pub avg_latency: Duration,
    pub window_len: usize,
}

impl StatsSummary {
    pub fn hit_rate_percent(&self) -> f64 {
        self.hit_rate * 100.0
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queries={} hits={} misses={} errors={} hit_rate={:.2}% avg_latency={:.3}ms",
            self.total_queries,
            self.cache_hits,
            self.cache_misses,
            self.errors,
            self.hit_rate_percent(),
            self.avg_latency.as_secs_f64() * 1000.0
        )
    }
}
