//! Document store access and the process-wide document cache

mod cache;
mod fetcher;

pub use cache::{DocumentCacheConfig, DocumentCacheService};
pub use fetcher::HttpDocumentFetcher;
