//! Web search tool
//!
//! Queries the DuckDuckGo HTML endpoint (no API key required) and extracts
//! result titles, snippets, and URLs from the returned page.

use std::time::Duration;

use reqwest::Client;

use crate::core::{DelverError, Result};

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Tool that searches the web
pub struct SearchTool {
    client: Client,
    max_results: usize,
}

impl SearchTool {
    /// Create a search tool returning at most `max_results` results
    pub fn new(max_results: usize) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; Delver/0.1)")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DelverError::tool(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_results,
        })
    }

    /// Search the web and return formatted results as text
    pub async fn search(&self, query: &str) -> Result<String> {
        let url = format!("{}?q={}", SEARCH_ENDPOINT, urlencoding::encode(query));

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DelverError::tool(format!(
                "Search request failed with status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let results = extract_results(&html, self.max_results);

        if results.is_empty() {
            Ok(format!("No results found for: {}", query))
        } else {
            Ok(results.join("\n\n"))
        }
    }
}

/// Extract up to `max` results from the DuckDuckGo HTML response
fn extract_results(html: &str, max: usize) -> Vec<String> {
    let mut results = Vec::new();

    for chunk in html.split("class=\"result__body\"").skip(1) {
        if results.len() >= max {
            break;
        }

        let title = text_after(chunk, "class=\"result__a\"");
        let snippet = text_after(chunk, "class=\"result__snippet\"");
        let url = text_after(chunk, "class=\"result__url\"");

        if let Some(title) = title {
            let mut entry = decode_entities(&title);
            if let Some(snippet) = snippet {
                entry.push('\n');
                entry.push_str(&decode_entities(&snippet));
            }
            if let Some(url) = url {
                entry.push_str(&format!("\nURL: {}", url.trim()));
            }
            results.push(entry);
        }
    }

    results
}

/// First text node following the element opened by `marker`
fn text_after(chunk: &str, marker: &str) -> Option<String> {
    let text = chunk
        .split(marker)
        .nth(1)?
        .split('>')
        .nth(1)?
        .split('<')
        .next()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Basic HTML entity decoding
fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <div class="result__body">
            <a class="result__a" href="/x">Printing press - history</a>
            <a class="result__snippet" href="/x">Johannes Gutenberg&#39;s movable type</a>
            <span class="result__url"> example.org/press </span>
        </div>
        <div class="result__body">
            <a class="result__a" href="/y">Second result</a>
            <a class="result__snippet" href="/y">Another snippet</a>
            <span class="result__url"> example.org/second </span>
        </div>
    "#;

    #[test]
    fn test_extract_results() {
        let results = extract_results(FIXTURE, 5);
        assert_eq!(results.len(), 2);
        assert!(results[0].contains("Printing press - history"));
        assert!(results[0].contains("Gutenberg's movable type"));
        assert!(results[0].contains("URL: example.org/press"));
    }

    #[test]
    fn test_extract_results_bounded() {
        let results = extract_results(FIXTURE, 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_extract_results_empty_html() {
        assert!(extract_results("<html></html>", 5).is_empty());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("a &amp; b &lt;c&gt; &quot;d&quot;"),
            "a & b <c> \"d\""
        );
    }
}
