use ferrous_relay_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const MAX_DATAGRAM_SIZE: usize = 4096;
const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Receives datagrams until `shutdown` fires, handling each on its own task.
pub async fn start_dns_server(
    socket: UdpSocket,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket = Arc::new(socket);
    let handler = Arc::new(handler);
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server: shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => {
                let (len, peer) = match result {
                    Ok(received) => received,
                    Err(e) => {
                        // ICMP port-unreachable from a previous reply surfaces here on some platforms.
                        debug!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let datagram = recv_buf[..len].to_vec();
                let socket = Arc::clone(&socket);
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    if let Some(response) = handler.handle_datagram(&datagram).await {
                        if let Err(e) = socket.send_to(&response, peer).await {
                            error!(client = %peer, error = %e, "Failed to send response");
                        }
                    }
                });
            }
        }
    }

    Ok(())
}

pub fn bind_udp_socket(bind_addr: &str) -> anyhow::Result<UdpSocket> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
