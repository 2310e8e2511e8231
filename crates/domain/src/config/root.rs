use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::cache::{CacheConfig, MAX_TTL_SECS};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::stats::StatsConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-relay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-relay/config.toml";

/// Main configuration structure for Ferrous Relay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path (must exist)
    /// 2. ferrous-relay.toml in current directory
    /// 3. /etc/ferrous-relay/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen_address {
            self.server.listen_address = listen;
        }
        if !overrides.upstream_servers.is_empty() {
            self.upstream.servers = overrides.upstream_servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid listen address '{}'",
                self.server.listen_address
            )));
        }

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        if let Some(blank) = self.upstream.servers.iter().find(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Invalid upstream server '{}'",
                blank
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries cannot be 0".to_string(),
            ));
        }

        if self.cache.default_ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "Cache default_ttl_secs cannot exceed {}",
                MAX_TTL_SECS
            )));
        }

        if self.cache.compaction_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache compaction interval cannot be 0".to_string(),
            ));
        }

        if self.stats.enabled && self.stats.report_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Stats report interval cannot be 0 when stats are enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub upstream_servers: Vec<String>,
    pub log_level: Option<String>,
}
