use ferrous_relay_application::ports::ResponseCachePort;
use ferrous_relay_application::use_cases::GetQueryStatsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(30);

/// Logs the query statistics summary on a fixed interval.
pub struct StatsReportJob {
    stats: Arc<GetQueryStatsUseCase>,
    cache: Option<Arc<dyn ResponseCachePort>>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl StatsReportJob {
    pub fn new(stats: Arc<GetQueryStatsUseCase>) -> Self {
        Self {
            stats,
            cache: None,
            interval: DEFAULT_REPORT_INTERVAL,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Adds the cache entry count to each report.
    pub fn with_cache(mut self, cache: Arc<dyn ResponseCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn report(&self) {
        let summary = self.stats.execute();
        let cache_entries = self.cache.as_ref().map(|cache| cache.len());

        info!(
            total_queries = summary.total_queries,
            cache_hits = summary.cache_hits,
            cache_misses = summary.cache_misses,
            errors = summary.errors,
            hit_rate = summary.hit_rate,
            avg_latency_us = summary.avg_latency.as_micros() as u64,
            cache_entries = ?cache_entries,
            "Stats: {}",
            summary
        );
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval.as_secs(), "Starting stats report job");

        let mut interval = tokio::time::interval(self.interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StatsReportJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.report();
                }
            }
        }
    }
}
