use crate::ports::{QueryStatsRecorder, ResponseCachePort, UpstreamResolver};
use crate::use_cases::dns::message::{error_response, question_from_query};
use ferrous_relay_domain::config::CacheConfig;
use ferrous_relay_domain::{CacheKey, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Terminal state reached while handling one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    CacheHit,
    Upstream,
    UpstreamFailure,
    Malformed,
}

impl QueryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheHit => "cache_hit",
            Self::Upstream => "upstream",
            Self::UpstreamFailure => "upstream_failure",
            Self::Malformed => "malformed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryResponse {
    pub message: Message,
    pub outcome: QueryOutcome,
}

pub struct HandleDnsQueryUseCase {
    cache: Arc<dyn ResponseCachePort>,
    upstream: Arc<dyn UpstreamResolver>,
    stats: Arc<dyn QueryStatsRecorder>,
    default_ttl_secs: i64,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        cache: Arc<dyn ResponseCachePort>,
        upstream: Arc<dyn UpstreamResolver>,
        stats: Arc<dyn QueryStatsRecorder>,
    ) -> Self {
        Self {
            cache,
            upstream,
            stats,
            default_ttl_secs: CacheConfig::default().default_ttl_secs,
        }
    }

    pub fn with_default_ttl(mut self, ttl_secs: i64) -> Self {
        self.default_ttl_secs = ttl_secs;
        self
    }

    /// Counts a datagram that never decoded into a query as malformed input.
    pub fn record_undecodable(&self, latency: Duration) {
        self.stats
            .record(latency, false, Some(&DomainError::MalformedQuery));
    }

    /// Always produces a response; failures are reported through its code.
    pub async fn execute(&self, query: &Message) -> QueryResponse {
        let start = Instant::now();

        let Some(first) = query.queries().first() else {
            let error = DomainError::MalformedQuery;
            self.stats.record(start.elapsed(), false, Some(&error));
            debug!(id = query.id(), "Query without question, answering FORMERR");
            return QueryResponse {
                message: error_response(query, ResponseCode::FormErr),
                outcome: QueryOutcome::Malformed,
            };
        };

        let question = question_from_query(first);
        let key = CacheKey::from_question(&question);

        if let Some(mut cached) = self.cache.get(&key) {
            cached.set_id(query.id());
            self.stats.record(start.elapsed(), true, None);
            debug!(question = %question, "Cache hit");
            return QueryResponse {
                message: cached,
                outcome: QueryOutcome::CacheHit,
            };
        }

        match self.upstream.resolve(query).await {
            Ok(mut answer) => {
                if answer.response_code() == ResponseCode::NoError && !answer.answers().is_empty()
                {
                    self.cache.set(key, &answer, self.default_ttl_secs);
                }

                answer.set_id(query.id());
                self.stats.record(start.elapsed(), false, None);
                debug!(
                    question = %question,
                    rcode = %answer.response_code(),
                    answers = answer.answers().len(),
                    "Resolved upstream"
                );
                QueryResponse {
                    message: answer,
                    outcome: QueryOutcome::Upstream,
                }
            }
            Err(e) => {
                self.stats.record(start.elapsed(), false, Some(&e));
                warn!(question = %question, error = %e, "Upstream resolution failed");
                QueryResponse {
                    message: error_response(query, ResponseCode::ServFail),
                    outcome: QueryOutcome::UpstreamFailure,
                }
            }
        }
    }
}
