//! Subdomain-candidate search source.
//!
//! The source is a plain HTML search index; results come back embedded
//! in markup. Candidate strings are the `<cite>` fragments, which may
//! themselves contain formatting tags injected around ad content, so
//! tags are stripped before the strings are handed to the discovery
//! engine for parsing and validation.

use netrecon_core::{ReconError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

/// Default search endpoint
const DEFAULT_BASE_URL: &str = "https://www.google.com/search";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

static CITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<cite[^>]*>(.+?)</cite>").expect("valid cite regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Client for the subdomain-candidate source
#[derive(Clone)]
pub struct SearchClient {
    http: HttpClient,
    base_url: String,
}

impl SearchClient {
    /// Create a client against the default endpoint
    #[must_use]
    pub fn new() -> Self {
        SearchClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::new()
    }

    /// Query one page of subdomain candidates for `domain`.
    ///
    /// `exclude` narrows the query with `-site:` terms; the root domain
    /// is never excluded even if listed, so the source keeps returning
    /// it as context for deeper results. Returns raw candidate strings
    /// with markup stripped; parsing and validation happen upstream.
    pub async fn candidates(
        &self,
        domain: &str,
        exclude: &[String],
        page_size: u32,
        offset: u32,
    ) -> Result<Vec<String>> {
        let mut query = format!("site:*{domain}");
        for excluded in exclude {
            if excluded != domain {
                query.push_str(" -site:");
                query.push_str(excluded);
            }
        }

        debug!(domain, offset, excluded = exclude.len(), "candidate query");
        let body = self
            .fetch(&[
                ("hl", "en"),
                ("num", &page_size.to_string()),
                ("start", &offset.to_string()),
                ("q", &query),
            ])
            .await?;

        Ok(extract_citations(&body))
    }

    /// Look for a company-profile page for `domain`.
    ///
    /// Returns the first cited LinkedIn company URL, if any.
    pub async fn company_page(&self, domain: &str) -> Result<Option<String>> {
        let query = format!("site:linkedin.com/company \"{domain}\"");
        let body = self
            .fetch(&[("hl", "en"), ("num", "10"), ("q", &query)])
            .await?;

        Ok(extract_citations(&body)
            .into_iter()
            .find(|url| url.contains("linkedin.com/company/")))
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .http
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(|e| ReconError::Search(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReconError::Search(format!(
                "search endpoint returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ReconError::Search(e.to_string()))
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull `<cite>` fragments out of a results page and strip inner tags.
fn extract_citations(body: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for capture in CITE_RE.captures_iter(body) {
        let cleaned = TAG_RE.replace_all(&capture[1], "").trim().to_string();
        if !cleaned.is_empty() && !seen.contains(&cleaned) {
            seen.push(cleaned);
        }
    }
    seen
}

/// Builder for configuring a [`SearchClient`]
pub struct SearchClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl SearchClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("netrecon/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> SearchClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        SearchClient {
            http,
            base_url: self.base_url,
        }
    }
}

impl Default for SearchClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_cite_fragments() {
        let body = r"<div><cite>www.example.com/about</cite>
            <cite class=x>mail.example.com</cite></div>";
        assert_eq!(
            extract_citations(body),
            vec!["www.example.com/about", "mail.example.com"]
        );
    }

    #[test]
    fn strips_inner_tags_from_citations() {
        let body = "<cite>https://<b>shop</b>.example.com/item</cite>";
        assert_eq!(extract_citations(body), vec!["https://shop.example.com/item"]);
    }

    #[test]
    fn deduplicates_citations_preserving_order() {
        let body = "<cite>a.example.com</cite><cite>b.example.com</cite><cite>a.example.com</cite>";
        assert_eq!(extract_citations(body), vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn empty_page_yields_no_candidates() {
        assert!(extract_citations("<html><body>no results</body></html>").is_empty());
    }
}
