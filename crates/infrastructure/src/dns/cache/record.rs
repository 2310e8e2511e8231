use hickory_proto::op::Message;
use std::time::{Duration, Instant};

/// A stored answer and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub message: Message,
    pub inserted_at: Instant,
    pub expires_at: Instant,
}

impl CachedResponse {
    /// `None` when `ttl` reaches past what `Instant` can represent.
    pub fn new(message: Message, ttl: Duration) -> Option<Self> {
        let now = Instant::now();
        let expires_at = now.checked_add(ttl)?;
        Some(Self {
            message,
            inserted_at: now,
            expires_at,
        })
    }

    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn remaining_ttl(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
