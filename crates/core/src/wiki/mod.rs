//! # Wikipedia
//!
//! Two-step lookup against the MediaWiki API: title search, then one
//! plain-text extract fetch per title. Results come back as uniform
//! [`SearchSnippet`] records in search-relevance order.
//!
//! Network failures never escape this module. A failed title search yields
//! no snippets; a failed extract fetch drops only that title.

pub mod client;
pub mod snippet;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{WikiConfig, WikipediaClient, MAX_RESULTS};
pub use snippet::{page_url, truncate_chars, SearchSnippet};

use async_trait::async_trait;

/// Anything that can turn a query into ordered snippets.
///
/// The orchestrator depends on this rather than on [`WikipediaClient`] so the
/// extractive path can run against canned results.
#[async_trait]
pub trait SnippetSource: Send + Sync {
    async fn search(&self, query: &str) -> Vec<SearchSnippet>;
}

#[async_trait]
impl SnippetSource for WikipediaClient {
    async fn search(&self, query: &str) -> Vec<SearchSnippet> {
        WikipediaClient::search(self, query).await
    }
}
