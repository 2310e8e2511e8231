use crate::ports::ResponseCachePort;
use std::sync::Arc;
use tracing::info;

pub struct ClearCacheUseCase {
    cache: Arc<dyn ResponseCachePort>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> usize {
        let removed = self.cache.clear();
        info!(entries_removed = removed, "Response cache cleared");
        removed
    }
}
