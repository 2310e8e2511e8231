use ferrous_relay_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up, since the subscriber depends on the config.
pub fn log_effective_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        listen = %config.server.listen_address,
        upstreams = ?config.upstream.servers,
        upstream_timeout_secs = config.upstream.timeout_secs,
        cache_max_entries = config.cache.max_entries,
        cache_default_ttl_secs = config.cache.default_ttl_secs,
        stats_enabled = config.stats.enabled,
        "Configuration loaded"
    );
}
