//! Configuration for a summarization run.
//!
//! [`SummarifyConfig`] bundles the settings of the download, body extraction
//! and summary steps.
//!
//! # Example
//!
//! ```rust
//! use summarify_core::SummarifyConfig;
//!
//! let config = SummarifyConfig::builder()
//!     .timeout(10)
//!     .max_sentences(3)
//!     .build();
//! assert_eq!(config.fetch.timeout, 10);
//! assert_eq!(config.summary.max_sentences, 3);
//! ```

use crate::extract::ExtractConfig;
use crate::fetch::FetchConfig;
use crate::nlp::SummaryConfig;

/// Settings for every step of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct SummarifyConfig {
    /// HTTP settings for downloading the article.
    pub fetch: FetchConfig,

    /// Body text extraction settings.
    pub extract: ExtractConfig,

    /// Summary and keyword settings.
    pub summary: SummaryConfig,
}

impl SummarifyConfig {
    /// Creates a new builder for SummarifyConfig.
    pub fn builder() -> SummarifyConfigBuilder {
        SummarifyConfigBuilder::new()
    }
}

/// Builder for SummarifyConfig.
///
/// Provides a fluent API over the most commonly tuned settings.
pub struct SummarifyConfigBuilder {
    config: SummarifyConfig,
}

impl SummarifyConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SummarifyConfig::default() }
    }

    /// Sets the download timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent header sent with downloads.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the maximum number of sentences in the summary.
    pub fn max_sentences(mut self, value: usize) -> Self {
        self.config.summary.max_sentences = value;
        self
    }

    /// Sets the number of keywords kept on the article.
    pub fn max_keywords(mut self, value: usize) -> Self {
        self.config.summary.max_keywords = value;
        self
    }

    /// Sets the minimum length of a paragraph that votes for its container.
    pub fn min_paragraph_chars(mut self, value: usize) -> Self {
        self.config.extract.min_paragraph_chars = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> SummarifyConfig {
        self.config
    }
}

impl Default for SummarifyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
