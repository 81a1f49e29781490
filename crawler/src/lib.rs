//! HTTP document source for xkcd comics.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use xkcd_core::{DocId, DocumentSource};

pub const DEFAULT_BASE_URL: &str = "https://xkcd.com";
pub const DEFAULT_USER_AGENT: &str = "xkcd-search/0.1";

/// Metadata served at `/<num>/info.0.json`. Only `transcript` feeds the index.
#[derive(Debug, Clone, Deserialize)]
pub struct Comic {
    pub num: u32,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub img: String,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// No timeout when unset: a stalled request blocks the build pass.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), user_agent: DEFAULT_USER_AGENT.to_string(), timeout: None }
    }
}

/// Parse a base URL, making sure it ends in `/` so `join` appends rather than replaces.
pub fn parse_base(base: &str) -> Result<Url> {
    let mut s = base.trim().to_string();
    if !s.ends_with('/') {
        s.push('/');
    }
    let url = Url::parse(&s).with_context(|| format!("invalid base url {base:?}"))?;
    if !url.scheme().starts_with("http") {
        return Err(anyhow!("base url must be http(s): {base}"));
    }
    Ok(url)
}

/// URL of the metadata document for comic `num`.
pub fn comic_url(base: &Url, num: DocId) -> Result<Url> {
    base.join(&format!("{num}/info.0.json")).with_context(|| format!("building url for comic {num}"))
}

#[derive(Debug, Clone)]
pub struct XkcdClient {
    client: Client,
    base: Url,
}

impl XkcdClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5));
        if let Some(t) = config.timeout {
            builder = builder.timeout(t);
        }
        Ok(Self { client: builder.build()?, base: parse_base(&config.base_url)? })
    }

    pub fn base(&self) -> &Url { &self.base }

    /// Fetch comic metadata. `Ok(None)` on HTTP 404.
    pub async fn comic(&self, num: DocId) -> Result<Option<Comic>> {
        let url = comic_url(&self.base, num)?;
        let resp = self.client.get(url.clone()).send().await.with_context(|| format!("GET {url}"))?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "comic not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(anyhow!("GET {url} returned {status}"));
        }
        let comic: Comic = resp.json().await.with_context(|| format!("decoding {url}"))?;
        tracing::debug!(%url, num = comic.num, title = %comic.safe_title, "fetched comic");
        tracing::trace!(num = comic.num, transcript = %comic.transcript, "comic transcript");
        Ok(Some(comic))
    }
}

impl DocumentSource for XkcdClient {
    async fn fetch(&self, doc_id: DocId) -> Result<Option<String>> {
        Ok(self.comic(doc_id).await?.map(|c| c.transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gets_trailing_slash() {
        let base = parse_base("https://xkcd.com").unwrap();
        assert_eq!(comic_url(&base, 614).unwrap().as_str(), "https://xkcd.com/614/info.0.json");
        let base = parse_base("http://localhost:8080/mirror").unwrap();
        assert_eq!(comic_url(&base, 1).unwrap().as_str(), "http://localhost:8080/mirror/1/info.0.json");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(parse_base("ftp://xkcd.com").is_err());
        assert!(parse_base("not a url").is_err());
    }

    #[test]
    fn comic_decodes_with_missing_fields() {
        let c: Comic = serde_json::from_str(r#"{"num": 1, "title": "Barrel - Part 1", "extra": 3}"#).unwrap();
        assert_eq!(c.num, 1);
        assert!(c.transcript.is_empty());
    }
}
