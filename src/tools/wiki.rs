//! Encyclopedia lookup tool
//!
//! Queries the MediaWiki Action API for plain-text intro extracts. Results
//! are bounded in count and excerpt length so a single lookup cannot flood
//! the conversation context.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::core::{DelverError, Result};

const WIKI_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Tool that looks up topics on Wikipedia
pub struct WikiTool {
    client: Client,
    max_results: usize,
    excerpt_chars: usize,
}

/// Top-level API response
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

/// The `query` object of the response
#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

/// A single page hit
#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    index: i64,
}

impl WikiTool {
    /// Create a lookup tool bounded to `max_results` pages and
    /// `excerpt_chars` characters of extract per page
    pub fn new(max_results: usize, excerpt_chars: usize) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; Delver/0.1)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DelverError::tool(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_results,
            excerpt_chars,
        })
    }

    /// Look up a topic and return formatted page summaries as text
    pub async fn lookup(&self, query: &str) -> Result<String> {
        let limit = self.max_results.to_string();
        let response = self
            .client
            .get(WIKI_ENDPOINT)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("generator", "search"),
                ("gsrsearch", query),
                ("gsrlimit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DelverError::tool(format!(
                "Encyclopedia request failed with status {}",
                response.status()
            )));
        }

        let body: QueryResponse = response.json().await?;
        let mut pages: Vec<Page> = body
            .query
            .map(|q| q.pages.into_values().collect())
            .unwrap_or_default();

        if pages.is_empty() {
            return Ok(format!("No encyclopedia entry found for: {}", query));
        }

        // The pages map is keyed by page id; search rank lives in `index`
        pages.sort_by_key(|p| p.index);

        let formatted: Vec<String> = pages
            .into_iter()
            .take(self.max_results)
            .map(|p| {
                format!(
                    "Page: {}\nSummary: {}",
                    p.title,
                    truncate_chars(&p.extract, self.excerpt_chars)
                )
            })
            .collect();

        Ok(formatted.join("\n\n"))
    }
}

/// Truncate to at most `max` characters on a char boundary
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_response_parsing_and_ordering() {
        let json = r#"{
            "query": {
                "pages": {
                    "42": {"title": "Second", "extract": "later hit", "index": 2},
                    "7": {"title": "First", "extract": "best hit", "index": 1}
                }
            }
        }"#;

        let body: QueryResponse = serde_json::from_str(json).unwrap();
        let mut pages: Vec<Page> = body.query.unwrap().pages.into_values().collect();
        pages.sort_by_key(|p| p.index);

        assert_eq!(pages[0].title, "First");
        assert_eq!(pages[1].title, "Second");
    }

    #[test]
    fn test_missing_query_object() {
        let body: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(body.query.is_none());
    }
}
