use ferrous_relay_application::ports::QueryStatsRecorder;
use ferrous_relay_domain::{DomainError, StatsSummary};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub const LATENCY_WINDOW: usize = 1000;

#[derive(Default)]
struct StatsState {
    total_queries: u64,
    cache_hits: u64,
    cache_misses: u64,
    errors: u64,
    latencies: VecDeque<Duration>,
    latency_sum: Duration,
}

/// Process-wide query counters plus a FIFO of the most recent latencies.
///
/// All fields sit behind one lock so `record` and `summary` are atomic with
/// respect to each other.
pub struct QueryStatsCollector {
    state: Mutex<StatsState>,
    window: usize,
}

impl QueryStatsCollector {
    pub fn new() -> Self {
        Self::with_window(LATENCY_WINDOW)
    }

    pub fn with_window(window: usize) -> Self {
        let window = window.max(1);
        Self {
            state: Mutex::new(StatsState {
                latencies: VecDeque::with_capacity(window),
                ..Default::default()
            }),
            window,
        }
    }
}

impl Default for QueryStatsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryStatsRecorder for QueryStatsCollector {
    fn record(&self, latency: Duration, cache_hit: bool, error: Option<&DomainError>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        state.total_queries += 1;
        if cache_hit {
            state.cache_hits += 1;
        } else {
            state.cache_misses += 1;
        }
        if error.is_some() {
            state.errors += 1;
        }

        state.latencies.push_back(latency);
        state.latency_sum += latency;
        if state.latencies.len() > self.window {
            if let Some(oldest) = state.latencies.pop_front() {
                state.latency_sum -= oldest;
            }
        }
    }

    fn summary(&self) -> StatsSummary {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let hit_rate = if state.total_queries == 0 {
            0.0
        } else {
            state.cache_hits as f64 / state.total_queries as f64
        };

        let window_len = state.latencies.len();
        let avg_latency = if window_len == 0 {
            Duration::ZERO
        } else {
            state.latency_sum / window_len as u32
        };

        StatsSummary {
            total_queries: state.total_queries,
            cache_hits: state.cache_hits,
            cache_misses: state.cache_misses,
            errors: state.errors,
            hit_rate,
            avg_latency,
            window_len,
        }
    }
}
