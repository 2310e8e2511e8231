use crate::ports::QueryStatsRecorder;
use ferrous_relay_domain::StatsSummary;
use std::sync::Arc;

pub struct GetQueryStatsUseCase {
    stats: Arc<dyn QueryStatsRecorder>,
}

impl GetQueryStatsUseCase {
    pub fn new(stats: Arc<dyn QueryStatsRecorder>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) -> StatsSummary {
        self.stats.summary()
    }
}
