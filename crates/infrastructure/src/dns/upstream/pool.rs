use super::target::UpstreamTarget;
use async_trait::async_trait;
use ferrous_relay_application::ports::UpstreamResolver;
use ferrous_relay_domain::DomainError;
use hickory_proto::op::Message;
use std::time::Instant;
use tracing::{debug, warn};

/// Ordered failover over a fixed list of upstream targets.
///
/// Targets are tried one at a time in configured order; the first usable
/// answer wins and the rest are never contacted.
pub struct UpstreamPool {
    targets: Vec<UpstreamTarget>,
}

impl UpstreamPool {
    pub fn new(targets: Vec<UpstreamTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[UpstreamTarget] {
        &self.targets
    }

    async fn try_target(
        target: &UpstreamTarget,
        query_id: u16,
        message_bytes: &[u8],
    ) -> Result<Message, DomainError> {
        let response = tokio::time::timeout(
            target.timeout(),
            target.transport().send(message_bytes, target.timeout()),
        )
        .await
        .map_err(|_| DomainError::UpstreamTimeout)??;

        let message = Message::from_vec(&response.bytes)
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;

        if message.id() != query_id {
            return Err(DomainError::InvalidResponse(format!(
                "transaction id mismatch: expected {}, got {}",
                query_id,
                message.id()
            )));
        }

        Ok(message)
    }
}

#[async_trait]
impl UpstreamResolver for UpstreamPool {
    async fn resolve(&self, query: &Message) -> Result<Message, DomainError> {
        if self.targets.is_empty() {
            return Err(DomainError::NoUpstreamsConfigured);
        }

        let message_bytes = query
            .to_vec()
            .map_err(|e| DomainError::InvalidResponse(format!("Failed to encode query: {}", e)))?;

        let mut last_error = DomainError::NoUpstreamsConfigured;

        for (index, target) in self.targets.iter().enumerate() {
            let start = Instant::now();
            match Self::try_target(target, query.id(), &message_bytes).await {
                Ok(message) => {
                    debug!(
                        server = %target.address(),
                        position = index,
                        latency_ms = start.elapsed().as_millis() as u64,
                        "Upstream responded"
                    );
                    return Ok(message);
                }
                Err(e) => {
                    warn!(
                        server = %target.address(),
                        position = index,
                        error = %e,
                        "Upstream failed, failing over"
                    );
                    last_error = e;
                }
            }
        }

        Err(DomainError::AllUpstreamsFailed {
            attempts: self.targets.len(),
            last_error: Box::new(last_error),
        })
    }
}
