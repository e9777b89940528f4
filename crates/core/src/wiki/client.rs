//! # Wikipedia Client
//!
//! Talks to the MediaWiki action API. Search first, then fetch each
//! candidate's extract in ranking order.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::snippet::{page_url, truncate_chars, SearchSnippet};
use crate::error::WikiError;

/// Hard ceiling on candidate titles per search
pub const MAX_RESULTS: usize = 3;

/// Configuration for the Wikipedia client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// MediaWiki action API endpoint
    pub api_url: String,
    /// Prefix for canonical page URLs
    pub page_base_url: String,
    /// Candidate titles per search, clamped to `1..=MAX_RESULTS`
    pub max_results: usize,
    /// Character budget for each extract
    pub extract_chars: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            page_base_url: "https://en.wikipedia.org/wiki/".to_string(),
            max_results: MAX_RESULTS,
            extract_chars: 1200,
            timeout_secs: 5,
            user_agent: "wikiagent/0.1".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractQuery {
    // keyed by opaque page id
    #[serde(default)]
    pages: BTreeMap<String, ExtractPage>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    extract: Option<String>,
}

/// HTTP client for the Wikipedia search and extract APIs
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    config: WikiConfig,
}

impl WikipediaClient {
    /// Create a client with a bounded per-request timeout
    pub fn new(mut config: WikiConfig) -> Result<Self, WikiError> {
        let max_results = config.max_results.clamp(1, MAX_RESULTS);
        if max_results != config.max_results {
            tracing::warn!(
                configured = config.max_results,
                using = max_results,
                "max_results out of range"
            );
            config.max_results = max_results;
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Canonical page URL for `title`
    pub fn page_url(&self, title: &str) -> String {
        page_url(&self.config.page_base_url, title)
    }

    /// Search Wikipedia and return up to `max_results` snippets.
    ///
    /// Never fails: a broken title search returns an empty list, and a
    /// broken extract fetch drops only that title. Ranking order is kept.
    pub async fn search(&self, query: &str) -> Vec<SearchSnippet> {
        let titles = match self.search_titles(query).await {
            Ok(titles) => titles,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Title search failed, no snippets");
                return Vec::new();
            }
        };

        let mut snippets = Vec::with_capacity(titles.len());
        for title in titles {
            match self.fetch_extract(&title).await {
                Ok(extract) => snippets.push(SearchSnippet {
                    url: self.page_url(&title),
                    title,
                    extract,
                }),
                Err(e) => {
                    tracing::warn!(title = %title, error = %e, "Extract fetch failed, skipping title");
                }
            }
        }

        tracing::debug!(query = %query, count = snippets.len(), "Wikipedia search complete");
        snippets
    }

    /// Ranked candidate titles for `query`.
    ///
    /// A response without `query` or `query.search` counts as zero results.
    pub async fn search_titles(&self, query: &str) -> Result<Vec<String>, WikiError> {
        let url = format!(
            "{}?action=query&list=search&format=json&srsearch={}&srlimit={}",
            self.config.api_url,
            urlencoding::encode(query),
            self.config.max_results
        );

        let response: SearchResponse = self.get_json(&url).await?;

        Ok(response
            .query
            .unwrap_or_default()
            .search
            .into_iter()
            .map(|hit| hit.title)
            .filter(|title| !title.is_empty())
            .take(self.config.max_results)
            .collect())
    }

    /// Plain-text extract for the exact `title`, truncated to the budget.
    ///
    /// Takes the first page in `query.pages`; a missing mapping or field is
    /// an empty extract, not an error.
    pub async fn fetch_extract(&self, title: &str) -> Result<String, WikiError> {
        let url = format!(
            "{}?action=query&prop=extracts&explaintext=1&format=json&titles={}",
            self.config.api_url,
            urlencoding::encode(title)
        );

        let response: ExtractResponse = self.get_json(&url).await?;

        let extract = response
            .query
            .and_then(|q| q.pages.into_values().next())
            .and_then(|page| page.extract)
            .unwrap_or_default();

        Ok(truncate_chars(&extract, self.config.extract_chars))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WikiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WikiError::Decode(e.to_string()))
    }
}
