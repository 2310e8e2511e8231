use async_trait::async_trait;
use ferrous_relay_domain::DomainError;
use hickory_proto::op::Message;

/// Forwards a query to the configured upstream servers.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Returns the first answer any upstream produced. Fails only once every
    /// upstream has failed.
    async fn resolve(&self, query: &Message) -> Result<Message, DomainError>;
}
