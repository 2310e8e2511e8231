#![allow(dead_code)]
#![allow(unused_imports)]

mod messages;

pub use dns_server_mock::{MockDnsServer, MockReply};
pub use messages::*;
pub use mock_transport::MockTransport;
