use super::metrics::CacheMetrics;
use super::record::CachedResponse;
use ferrous_relay_application::ports::{CacheMetricsSnapshot, ResponseCachePort};
use ferrous_relay_domain::config::MAX_TTL_SECS;
use ferrous_relay_domain::CacheKey;
use hickory_proto::op::Message;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Bounded LRU store of upstream answers.
///
/// Every operation takes the single inner lock for its whole duration, so a
/// reader never sees a partially applied `set`. Messages are cloned on the
/// way in and on the way out.
pub struct ResponseCache {
    entries: Mutex<LruCache<CacheKey, CachedResponse>>,
    max_entries: usize,
    metrics: CacheMetrics,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            max_entries: capacity.get(),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Stores a copy of `answer` for `ttl`. A zero `ttl` stores nothing.
    pub fn insert_for(&self, key: CacheKey, answer: &Message, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }

        let Some(record) = CachedResponse::new(answer.clone(), ttl) else {
            debug!(key = %key, ttl_secs = ttl.as_secs(), "TTL out of range, not caching");
            return;
        };
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if !entries.contains(&key) && entries.len() >= self.max_entries {
            if let Some((evicted, _)) = entries.pop_lru() {
                self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(key = %evicted, "Evicted least recently used entry");
            }
        }

        entries.put(key, record);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let expired: Vec<CacheKey> = entries
            .iter()
            .filter(|(_, record)| record.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            entries.pop(key);
        }

        let removed = expired.len();
        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
        }
        removed
    }
}

impl ResponseCachePort for ResponseCache {
    fn get(&self, key: &CacheKey) -> Option<Message> {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let expired = match entries.get(key) {
            Some(record) if !record.is_expired_at(now) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(record.message.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
            self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
        }
        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    fn set(&self, key: CacheKey, answer: &Message, ttl_secs: i64) {
        if ttl_secs <= 0 {
            return;
        }
        let ttl_secs = ttl_secs.min(MAX_TTL_SECS) as u64;
        self.insert_for(key, answer, Duration::from_secs(ttl_secs));
    }

    fn clear(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let removed = entries.len();
        entries.clear();
        removed
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.len(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.metrics.evictions.load(AtomicOrdering::Relaxed),
            expirations: self.metrics.expirations.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }
}
