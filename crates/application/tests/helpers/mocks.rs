use async_trait::async_trait;
use ferrous_relay_application::ports::{
    CacheMetricsSnapshot, QueryStatsRecorder, ResponseCachePort, UpstreamResolver,
};
use ferrous_relay_domain::{CacheKey, DomainError, StatsSummary};
use hickory_proto::op::Message;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct MockResponseCache {
    entries: Mutex<HashMap<CacheKey, Message>>,
    sets: Mutex<Vec<(CacheKey, i64)>>,
    gets: AtomicUsize,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: CacheKey, message: Message) {
        self.entries.lock().unwrap().insert(key, message);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn stored(&self, key: &CacheKey) -> Option<Message> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn set_calls(&self) -> Vec<(CacheKey, i64)> {
        self.sets.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::Relaxed)
    }
}

impl ResponseCachePort for MockResponseCache {
    fn get(&self, key: &CacheKey) -> Option<Message> {
        self.gets.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: CacheKey, answer: &Message, ttl_secs: i64) {
        self.sets.lock().unwrap().push((key.clone(), ttl_secs));
        if ttl_secs > 0 {
            self.entries.lock().unwrap().insert(key, answer.clone());
        }
    }

    fn clear(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len();
        entries.clear();
        removed
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.len(),
            ..Default::default()
        }
    }
}

/// Replays queued results in order; answers with an error once drained.
#[derive(Default)]
pub struct MockUpstreamResolver {
    results: Mutex<VecDeque<Result<Message, DomainError>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_answer(&self, message: Message) {
        self.results.lock().unwrap().push_back(Ok(message));
    }

    pub fn push_error(&self, error: DomainError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(&self, _query: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(DomainError::NoUpstreamsConfigured))
    }
}

#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub latency: Duration,
    pub cache_hit: bool,
    pub error: Option<DomainError>,
}

#[derive(Default)]
pub struct MockQueryStats {
    records: Mutex<Vec<RecordedQuery>>,
}

impl MockQueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RecordedQuery> {
        self.records.lock().unwrap().clone()
    }
}

impl QueryStatsRecorder for MockQueryStats {
    fn record(&self, latency: Duration, cache_hit: bool, error: Option<&DomainError>) {
        self.records.lock().unwrap().push(RecordedQuery {
            latency,
            cache_hit,
            error: error.cloned(),
        });
    }

    fn summary(&self) -> StatsSummary {
        let records = self.records.lock().unwrap();
        let total = records.len() as u64;
        let hits = records.iter().filter(|r| r.cache_hit).count() as u64;
        StatsSummary {
            total_queries: total,
            cache_hits: hits,
            cache_misses: total - hits,
            errors: records.iter().filter(|r| r.error.is_some()).count() as u64,
            hit_rate: if total == 0 { 0.0 } else { hits as f64 / total as f64 },
            avg_latency: Duration::ZERO,
            window_len: records.len(),
        }
    }
}
