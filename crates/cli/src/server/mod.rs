pub mod dns;

pub use dns::{bind_udp_socket, start_dns_server};
