mod metrics;
mod record;
mod storage;

pub use metrics::CacheMetrics;
pub use record::CachedResponse;
pub use storage::ResponseCache;
