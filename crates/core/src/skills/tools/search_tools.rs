//! # Search Tools
//!
//! Exposes the Wikipedia client to the generation phase. The tool is a thin
//! contract layer: validate the input, run the search, hand back snippets.

use std::sync::OnceLock;

use radkit::macros::tool;
use radkit::tools::ToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::wiki::{SearchSnippet, SnippetSource, WikiConfig, WikipediaClient};

/// Client used by [`wikipedia_search`]; installed once at startup.
static CLIENT: OnceLock<WikipediaClient> = OnceLock::new();

/// Install the process-wide client used by the search tool.
///
/// Returns `false` if a client was already installed; the first one wins.
pub fn install_client(client: WikipediaClient) -> bool {
    CLIENT.set(client).is_ok()
}

fn shared_client() -> Option<&'static WikipediaClient> {
    if let Some(client) = CLIENT.get() {
        return Some(client);
    }
    match WikipediaClient::new(WikiConfig::default()) {
        Ok(client) => Some(CLIENT.get_or_init(|| client)),
        Err(e) => {
            tracing::warn!(error = %e, "Could not build default Wikipedia client");
            None
        }
    }
}

/// Arguments for Wikipedia search
#[derive(Deserialize, JsonSchema)]
pub struct WikipediaSearchArgs {
    /// Search query
    pub query: String,
}

/// Search Wikipedia and return top article snippets
#[tool(description = "Search Wikipedia and return top article snippets with URLs.")]
pub async fn wikipedia_search(args: WikipediaSearchArgs) -> ToolResult {
    let Some(client) = shared_client() else {
        return ToolResult::error("Wikipedia client unavailable");
    };

    match search_payload(client, &args.query).await {
        Ok(payload) => ToolResult::success(payload),
        Err(e) => ToolResult::error(e),
    }
}

/// JSON handed back to the model: an array of `{title, extract, url}` in
/// ranking order.
pub async fn search_payload(source: &dyn SnippetSource, query: &str) -> Result<Value, String> {
    let snippets = search_snippets(source, query).await?;
    Ok(json!(snippets))
}

/// Validate the query, search, and keep only snippets with well-formed URLs.
pub async fn search_snippets(
    source: &dyn SnippetSource,
    query: &str,
) -> Result<Vec<SearchSnippet>, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("query must not be empty".to_string());
    }

    tracing::debug!(query = %query, "wikipedia_search tool invoked");

    let snippets = source
        .search(query)
        .await
        .into_iter()
        .filter(|snippet| match reqwest::Url::parse(&snippet.url) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(url = %snippet.url, error = %e, "Dropping snippet with malformed URL");
                false
            }
        })
        .collect();

    Ok(snippets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::test_support::spawn_mock;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSource {
        queries: Mutex<Vec<String>>,
        results: Vec<SearchSnippet>,
    }

    #[async_trait]
    impl SnippetSource for RecordingSource {
        async fn search(&self, query: &str) -> Vec<SearchSnippet> {
            self.queries.lock().unwrap().push(query.to_string());
            self.results.clone()
        }
    }

    fn snippet(title: &str, url: &str) -> SearchSnippet {
        SearchSnippet {
            title: title.to_string(),
            extract: format!("About {}", title),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_searching() {
        let source = RecordingSource {
            queries: Mutex::new(Vec::new()),
            results: vec![],
        };

        let result = search_snippets(&source, "   ").await;

        assert_eq!(result, Err("query must not be empty".to_string()));
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_results_pass_through_in_order() {
        let source = RecordingSource {
            queries: Mutex::new(Vec::new()),
            results: vec![
                snippet("Rust", "https://en.wikipedia.org/wiki/Rust"),
                snippet("Ferris", "https://en.wikipedia.org/wiki/Ferris"),
            ],
        };

        let result = search_snippets(&source, " rust language ").await.unwrap();

        assert_eq!(result, source.results);
        assert_eq!(*source.queries.lock().unwrap(), vec!["rust language"]);
    }

    #[tokio::test]
    async fn test_malformed_urls_are_dropped() {
        let source = RecordingSource {
            queries: Mutex::new(Vec::new()),
            results: vec![
                snippet("Good", "https://en.wikipedia.org/wiki/Good"),
                snippet("Bad", "not a url"),
            ],
        };

        let result = search_snippets(&source, "q").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Good");
    }

    #[tokio::test]
    async fn test_payload_from_live_client_is_ordered_snippet_array() {
        let client = WikipediaClient::new(WikiConfig {
            api_url: spawn_mock().await,
            ..WikiConfig::default()
        })
        .unwrap();

        let payload = search_payload(&client, "stars").await.unwrap();

        let items = payload.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            let mut keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
            keys.sort();
            assert_eq!(keys, vec!["extract", "title", "url"]);
        }
        assert_eq!(items[0]["title"], "Alpha Centauri");
        assert_eq!(items[0]["url"], "https://en.wikipedia.org/wiki/Alpha_Centauri");
        assert_eq!(items[1]["title"], "Gamma Ray");
        assert_eq!(items[1]["extract"], "");
    }

    #[tokio::test]
    async fn test_payload_for_failed_search_is_empty_array() {
        let client = WikipediaClient::new(WikiConfig {
            api_url: spawn_mock().await,
            ..WikiConfig::default()
        })
        .unwrap();

        assert_eq!(search_payload(&client, "outage").await.unwrap(), json!([]));
        assert!(search_payload(&client, "  ").await.is_err());
    }

    #[test]
    fn test_shared_client_is_installed_once() {
        let client = WikipediaClient::new(WikiConfig::default()).unwrap();
        install_client(client.clone());

        assert!(!install_client(client));
        let first = shared_client().map(|c| c as *const WikipediaClient);
        let second = shared_client().map(|c| c as *const WikipediaClient);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_args_schema_requires_query() {
        let schema = serde_json::to_value(schemars::schema_for!(WikipediaSearchArgs)).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "query"));
    }
}
