use ferrous_relay_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_COMPACTION_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically sweeps expired entries out of the response cache.
pub struct CacheMaintenanceJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            interval: DEFAULT_COMPACTION_INTERVAL,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval.as_secs(), "Starting cache maintenance job");

        let mut interval = tokio::time::interval(self.interval);
        // The first tick completes immediately; nothing has expired yet.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheMaintenanceJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.maintenance.run_compaction_cycle().await {
                        Ok(outcome) => {
                            if outcome.entries_removed > 0 {
                                info!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache compaction cycle completed"
                                );
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Cache compaction cycle failed");
                        }
                    }
                }
            }
        }
    }
}
