use ferrous_relay_application::ports::{CacheMaintenancePort, QueryStatsRecorder, ResponseCachePort};
use ferrous_relay_application::use_cases::{
    ClearCacheUseCase, GetQueryStatsUseCase, HandleDnsQueryUseCase,
};
use ferrous_relay_domain::Config;
use ferrous_relay_infrastructure::dns::{
    DnsServerHandler, QueryStatsCollector, ResponseCache, ResponseCacheMaintenance, UpstreamPool,
    UpstreamTarget,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<ResponseCache>,
    pub get_stats: Arc<GetQueryStatsUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub cache_maintenance: Arc<dyn CacheMaintenancePort>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = Self::build_upstream_pool(config).await?;
        let cache = Arc::new(ResponseCache::new(config.cache.max_entries));
        let stats = Arc::new(QueryStatsCollector::new());

        let handle_query = Arc::new(
            HandleDnsQueryUseCase::new(
                cache.clone() as Arc<dyn ResponseCachePort>,
                upstream,
                stats.clone() as Arc<dyn QueryStatsRecorder>,
            )
            .with_default_ttl(config.cache.default_ttl_secs),
        );

        let get_stats = Arc::new(GetQueryStatsUseCase::new(stats));
        let clear_cache = Arc::new(ClearCacheUseCase::new(
            cache.clone() as Arc<dyn ResponseCachePort>,
        ));
        let cache_maintenance: Arc<dyn CacheMaintenancePort> =
            Arc::new(ResponseCacheMaintenance::new(cache.clone()));

        info!(
            max_entries = cache.max_entries(),
            default_ttl_secs = config.cache.default_ttl_secs,
            "Response cache ready"
        );

        Ok(Self {
            cache,
            get_stats,
            clear_cache,
            cache_maintenance,
            handler: DnsServerHandler::new(handle_query),
        })
    }

    async fn build_upstream_pool(config: &Config) -> anyhow::Result<Arc<UpstreamPool>> {
        let timeout = config.upstream.timeout();
        let mut targets = Vec::with_capacity(config.upstream.servers.len());

        for (position, entry) in config.upstream.servers.iter().enumerate() {
            let target = UpstreamTarget::from_config(entry, timeout).await?;
            info!(
                position,
                configured = %entry,
                address = %target.address(),
                timeout_secs = timeout.as_secs(),
                "Upstream server registered"
            );
            targets.push(target);
        }

        Ok(Arc::new(UpstreamPool::new(targets)))
    }
}
