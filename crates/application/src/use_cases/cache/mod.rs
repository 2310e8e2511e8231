mod clear_cache;

pub use clear_cache::ClearCacheUseCase;
