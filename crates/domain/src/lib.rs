//! Ferrous Relay Domain Layer
pub mod cache_key;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_stats;
pub mod question;

pub use cache_key::CacheKey;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{QueryClass, RecordType};
pub use errors::DomainError;
pub use query_stats::StatsSummary;
pub use question::Question;
