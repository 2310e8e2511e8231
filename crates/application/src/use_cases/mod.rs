pub mod cache;
pub mod dns;
pub mod queries;

pub use cache::ClearCacheUseCase;
pub use dns::{HandleDnsQueryUseCase, QueryOutcome, QueryResponse};
pub use queries::GetQueryStatsUseCase;
