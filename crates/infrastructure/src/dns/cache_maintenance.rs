use super::cache::ResponseCache;

use async_trait::async_trait;
use ferrous_relay_application::ports::{
    CacheCompactionOutcome, CacheMaintenancePort, ResponseCachePort,
};
use ferrous_relay_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct ResponseCacheMaintenance {
    cache: Arc<ResponseCache>,
}

impl ResponseCacheMaintenance {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for ResponseCacheMaintenance {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError> {
        let entries_removed = self.cache.purge_expired();
        let cache_size = self.cache.len();

        debug!(entries_removed, cache_size, "Expired entry sweep finished");

        Ok(CacheCompactionOutcome {
            entries_removed,
            cache_size,
        })
    }
}
