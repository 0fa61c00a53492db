//! Article sources: where the HTML for a request comes from.
//!
//! The pipeline only needs `download(url) -> html`. [`HttpSource`] fetches
//! over the network, [`FileSource`] serves a local file for offline runs, and
//! [`StaticSource`] returns fixed markup.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{Result, SummarifyError};

/// Something that can download the HTML of an article.
///
/// An empty body is a valid answer; the pipeline decides that it means the
/// download failed.
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    async fn download(&self, url: &str) -> Result<String>;
}

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Summarify/1.0; article summarizer)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body as text.
/// It follows redirects, respects the configured timeout, and uses a browser-like
/// User-Agent for better compatibility. A non-success status is an error.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| SummarifyError::InvalidUrl(format!("{}: {}", url, e)))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SummarifyError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SummarifyError::Timeout { timeout: config.timeout }
            } else {
                SummarifyError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "article download rejected");
        return Err(SummarifyError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Downloads articles over HTTP(S).
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "fetch")]
impl ArticleSource for HttpSource {
    async fn download(&self, url: &str) -> Result<String> {
        fetch_url(url, &self.config).await
    }
}

/// Serves one local HTML file for every URL.
///
/// Callers should validate and sanitize the path when accepting user input.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for FileSource {
    async fn download(&self, _url: &str) -> Result<String> {
        fetch_file(&self.path)
    }
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: impl Into<PathBuf>) -> Result<String> {
    let path_buf = path.into();

    if !path_buf.exists() {
        Err(SummarifyError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SummarifyError::from)
    }
}

/// Returns the same markup for every URL.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    html: String,
}

impl StaticSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl ArticleSource for StaticSource {
    async fn download(&self, _url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}
