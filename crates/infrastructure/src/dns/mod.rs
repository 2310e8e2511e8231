pub mod cache;
pub mod cache_maintenance;
pub mod server;
pub mod stats;
pub mod transport;
pub mod upstream;

pub use cache::{CacheMetrics, CachedResponse, ResponseCache};
pub use cache_maintenance::ResponseCacheMaintenance;
pub use server::DnsServerHandler;
pub use stats::QueryStatsCollector;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use upstream::{UpstreamPool, UpstreamTarget};
