pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod stats;
pub mod upstream;

pub use cache::{CacheConfig, MAX_TTL_SECS};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use stats::StatsConfig;
pub use upstream::UpstreamConfig;
