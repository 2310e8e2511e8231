pub mod cache_maintenance;
pub mod runner;
pub mod stats_report;

pub use cache_maintenance::CacheMaintenanceJob;
pub use runner::JobRunner;
pub use stats_report::StatsReportJob;
