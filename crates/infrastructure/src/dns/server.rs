use ferrous_relay_application::use_cases::HandleDnsQueryUseCase;
use hickory_proto::op::{Message, OpCode, ResponseCode};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

const DNS_HEADER_LEN: usize = 12;

/// Bridges raw datagrams to the query use case.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when nothing should be sent back.
    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let start = Instant::now();
        let query = match Message::from_vec(datagram) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, len = datagram.len(), "Failed to decode query");
                let reply = header_formerr(datagram)?;
                self.use_case.record_undecodable(start.elapsed());
                return encode(&reply);
            }
        };

        let response = self.use_case.execute(&query).await;
        debug!(id = query.id(), outcome = response.outcome.as_str(), "Query handled");
        encode(&response.message)
    }
}

/// FORMERR built from the raw header alone, for queries that do not decode.
fn header_formerr(datagram: &[u8]) -> Option<Message> {
    if datagram.len() < DNS_HEADER_LEN {
        return None;
    }

    let id = u16::from_be_bytes([datagram[0], datagram[1]]);
    let recursion_desired = datagram[2] & 0x01 != 0;

    let mut reply = Message::error_msg(id, OpCode::Query, ResponseCode::FormErr);
    reply
        .set_recursion_desired(recursion_desired)
        .set_recursion_available(true);
    Some(reply)
}

fn encode(message: &Message) -> Option<Vec<u8>> {
    match message.to_vec() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(error = %e, id = message.id(), "Failed to encode response");
            None
        }
    }
}
