mod pool;
mod target;

pub use pool::UpstreamPool;
pub use target::UpstreamTarget;
