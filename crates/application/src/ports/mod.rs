mod cache_maintenance_port;
mod query_stats_port;
mod response_cache_port;
mod upstream_resolver;

pub use cache_maintenance_port::{CacheCompactionOutcome, CacheMaintenancePort};
pub use query_stats_port::QueryStatsRecorder;
pub use response_cache_port::{CacheMetricsSnapshot, ResponseCachePort};
pub use upstream_resolver::UpstreamResolver;
