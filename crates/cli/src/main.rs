use clap::Parser;
use ferrous_relay_application::ports::ResponseCachePort;
use ferrous_relay_application::use_cases::ClearCacheUseCase;
use ferrous_relay_domain::CliOverrides;
use ferrous_relay_jobs::{CacheMaintenanceJob, JobRunner, StatsReportJob};
use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-relay")]
#[command(version)]
#[command(about = "Ferrous Relay - caching, failover DNS forwarding proxy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (ip:port)
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Upstream server (host:port), repeat to set the failover order
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstreams: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        listen_address: cli.listen.clone(),
        upstream_servers: cli.upstreams.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Relay v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::config::log_effective_config(cli.config.as_deref(), &config);

    let services = di::DnsServices::new(&config).await?;
    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new()
        .with_cache_maintenance(
            CacheMaintenanceJob::new(services.cache_maintenance.clone())
                .with_interval(config.cache.compaction_interval()),
        )
        .with_shutdown_token(shutdown.clone());

    if config.stats.enabled {
        runner = runner.with_stats_report(
            StatsReportJob::new(services.get_stats.clone())
                .with_interval(config.stats.report_interval())
                .with_cache(services.cache.clone() as Arc<dyn ResponseCachePort>),
        );
    }
    let job_handles = runner.start().await;

    let socket = server::bind_udp_socket(&config.server.listen_address)?;
    let dns_shutdown = shutdown.clone();
    let dns_server = tokio::spawn(server::start_dns_server(
        socket,
        services.handler,
        dns_shutdown,
    ));

    spawn_cache_clear_on_hangup(services.clear_cache.clone(), shutdown.clone());

    wait_for_shutdown_signal().await;
    info!("Shutdown signal received");
    shutdown.cancel();

    match dns_server.await {
        Ok(Err(e)) => error!(error = %e, "DNS server error"),
        Err(e) => error!(error = %e, "DNS server task failed"),
        Ok(Ok(())) => {}
    }
    for handle in job_handles {
        let _ = handle.await;
    }

    info!("Final stats: {}", services.get_stats.execute());
    info!("Server shutdown complete");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// SIGHUP drops every cached answer without restarting the process.
#[cfg(unix)]
fn spawn_cache_clear_on_hangup(clear_cache: Arc<ClearCacheUseCase>, shutdown: CancellationToken) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            error!(error = %e, "Failed to install SIGHUP handler");
            return;
        }
    };

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                received = hangup.recv() => {
                    if received.is_none() {
                        break;
                    }
                    clear_cache.execute();
                }
            }
        }
    });
}

#[cfg(not(unix))]
fn spawn_cache_clear_on_hangup(_clear_cache: Arc<ClearCacheUseCase>, _shutdown: CancellationToken) {}
