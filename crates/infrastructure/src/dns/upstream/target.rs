use crate::dns::transport::{DnsTransport, UdpTransport};
use ferrous_relay_domain::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// One upstream resolver with its own timeout.
#[derive(Clone)]
pub struct UpstreamTarget {
    address: SocketAddr,
    timeout: Duration,
    transport: Arc<dyn DnsTransport>,
}

impl UpstreamTarget {
    pub fn udp(address: SocketAddr, timeout: Duration) -> Self {
        Self::with_transport(address, timeout, Arc::new(UdpTransport::new(address)))
    }

    pub fn with_transport(
        address: SocketAddr,
        timeout: Duration,
        transport: Arc<dyn DnsTransport>,
    ) -> Self {
        Self {
            address,
            timeout,
            transport,
        }
    }

    /// Turns a configured `host:port` entry into a UDP target.
    ///
    /// IP literals are used as-is; host names are looked up once, keeping the
    /// first address returned.
    pub async fn from_config(entry: &str, timeout: Duration) -> Result<Self, DomainError> {
        let address = resolve_address(entry).await?;
        Ok(Self::udp(address, timeout))
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> &Arc<dyn DnsTransport> {
        &self.transport
    }
}

impl fmt::Debug for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamTarget")
            .field("address", &self.address)
            .field("timeout", &self.timeout)
            .field("protocol", &self.transport.protocol_name())
            .finish()
    }
}

async fn resolve_address(entry: &str) -> Result<SocketAddr, DomainError> {
    let entry = entry.trim();
    if let Ok(addr) = entry.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let mut addrs = tokio::net::lookup_host(entry)
        .await
        .map_err(|e| DomainError::InvalidUpstream(format!("{}: {}", entry, e)))?;

    addrs
        .next()
        .ok_or_else(|| DomainError::InvalidUpstream(format!("{}: no addresses found", entry)))
}
