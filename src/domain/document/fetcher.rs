//! Document fetcher trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for retrieving raw document text from the remote document store
///
/// A failed fetch is an error for the single document only; callers in
/// the refresh pipeline log it and carry on with the other sources.
#[async_trait]
pub trait DocumentFetcher: Send + Sync + Debug {
    /// Fetch the plain-text content of one document
    async fn fetch(&self, document_id: &str) -> Result<String, DomainError>;
}
