use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed query: no question section")]
    MalformedQuery,

    #[error("Upstream query timeout")]
    UpstreamTimeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),

    #[error("All {attempts} upstream servers failed, last error: {last_error}")]
    AllUpstreamsFailed {
        attempts: usize,
        last_error: Box<DomainError>,
    },

    #[error("No upstream servers configured")]
    NoUpstreamsConfigured,

    #[error("Invalid upstream server: {0}")]
    InvalidUpstream(String),
}
