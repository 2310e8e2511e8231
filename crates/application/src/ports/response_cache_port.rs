use ferrous_relay_domain::CacheKey;
use hickory_proto::op::Message;

/// Snapshot of response cache metrics.
#[derive(Debug, Clone, Default)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub hit_rate: f64,
}

/// Bounded answer store keyed by question.
///
/// Implementations hand out and keep their own copies of messages; callers
/// may freely mutate what they pass in or get back.
pub trait ResponseCachePort: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Message>;

    /// A `ttl_secs` of zero or less stores nothing.
    fn set(&self, key: CacheKey, answer: &Message, ttl_secs: i64);

    /// Drops every entry, returning how many were removed.
    fn clear(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
