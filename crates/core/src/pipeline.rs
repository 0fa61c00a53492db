//! The article pipeline: one URL in, one [`Report`] out.
//!
//! A run normalizes the URL, downloads the page through an [`ArticleSource`],
//! parses it into an [`Article`], derives the summary and scores the
//! sentiment of the body text. The first failing step ends the run.

use serde::Serialize;

use crate::article::Article;
use crate::config::SummarifyConfig;
use crate::fetch::ArticleSource;
#[cfg(feature = "fetch")]
use crate::fetch::HttpSource;
use crate::normalize::normalize_url;
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::{Result, SummarifyError};

/// The outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The normalized URL that was downloaded.
    pub url: String,
    pub article: Article,
    /// Sentiment of the full body text.
    pub sentiment: Sentiment,
}

/// Runs requests against one article source.
///
/// # Example
///
/// ```rust
/// use summarify_core::{Pipeline, StaticSource, SummarifyError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pipeline = Pipeline::new(StaticSource::new("<html></html>"));
/// let err = pipeline.run("   ").await.unwrap_err();
/// assert!(matches!(err, SummarifyError::MissingUrl));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<S> {
    source: S,
    config: SummarifyConfig,
    analyzer: SentimentAnalyzer,
}

impl<S: ArticleSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, SummarifyConfig::default())
    }

    pub fn with_config(source: S, config: SummarifyConfig) -> Self {
        Self { source, config, analyzer: SentimentAnalyzer::new() }
    }

    pub fn with_analyzer(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn config(&self) -> &SummarifyConfig {
        &self.config
    }

    /// Runs one request for the raw text the user entered.
    ///
    /// # Errors
    ///
    /// - [`SummarifyError::MissingUrl`] when the input is blank
    /// - [`SummarifyError::DownloadFailed`] when the page body is empty
    /// - any error of the source itself, such as an HTTP failure
    pub async fn run(&self, input: &str) -> Result<Report> {
        let url = normalize_url(input).ok_or(SummarifyError::MissingUrl)?;
        tracing::debug!(%url, "downloading article");

        let html = self.source.download(&url).await?;
        if html.trim().is_empty() {
            tracing::debug!(%url, "download returned an empty body");
            return Err(SummarifyError::DownloadFailed);
        }
        tracing::debug!(%url, bytes = html.len(), "download complete");

        let mut article = Article::parse(&url, &html, &self.config.extract);
        article.nlp(&self.config.summary);
        tracing::debug!(
            title = article.title.as_deref().unwrap_or_default(),
            authors = article.authors.len(),
            words = article.word_count,
            has_summary = article.summary.is_some(),
            "article parsed"
        );

        let sentiment = self.analyzer.analyze(&article.text);
        tracing::debug!(polarity = sentiment.polarity, label = %sentiment.label, "sentiment scored");

        Ok(Report { url, article, sentiment })
    }
}

#[cfg(feature = "fetch")]
impl Pipeline<HttpSource> {
    /// A pipeline that downloads over HTTP using `config.fetch`.
    pub fn http(config: SummarifyConfig) -> Self {
        let source = HttpSource::new(config.fetch.clone());
        Self::with_config(source, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticSource;
    use crate::sentiment::{Lexicon, SentimentLabel};
    use rstest::rstest;

    const POSITIVE_HTML: &str = r#"
        <html>
        <head>
            <meta property="og:title" content="City Library Reopens">
            <meta name="author" content="Sam Lee">
            <meta property="article:published_time" content="2024-03-01T09:30:00Z">
        </head>
        <body>
            <article>
                <p>The city library reopened today after a successful renovation, and visitors were delighted.</p>
                <p>Readers said the new reading rooms are beautiful, and the staff were helpful and welcoming.</p>
            </article>
        </body>
        </html>
    "#;

    struct FailingSource;

    impl ArticleSource for FailingSource {
        async fn download(&self, url: &str) -> Result<String> {
            Err(SummarifyError::HttpStatus { status: 404, url: url.to_string() })
        }
    }

    #[tokio::test]
    async fn test_run_success() {
        let pipeline = Pipeline::new(StaticSource::new(POSITIVE_HTML));
        let report = pipeline.run("example.com/library").await.unwrap();

        assert_eq!(report.url, "https://example.com/library");
        assert_eq!(report.article.title.as_deref(), Some("City Library Reopens"));
        assert_eq!(report.article.authors, vec!["Sam Lee".to_string()]);
        assert!(report.article.publish_date.is_some());
        assert!(report.article.summary.is_some());
        assert_eq!(report.sentiment.label, SentimentLabel::Positive);
        assert!(report.sentiment.polarity > 0.0);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    #[tokio::test]
    async fn test_run_blank_input(#[case] input: &str) {
        let pipeline = Pipeline::new(StaticSource::new(POSITIVE_HTML));
        let result = pipeline.run(input).await;
        assert!(matches!(result, Err(SummarifyError::MissingUrl)));
    }

    #[rstest]
    #[case("")]
    #[case("  \n ")]
    #[tokio::test]
    async fn test_run_empty_download(#[case] body: &str) {
        let pipeline = Pipeline::new(StaticSource::new(body));
        let result = pipeline.run("https://example.com").await;
        assert!(matches!(result, Err(SummarifyError::DownloadFailed)));
    }

    #[tokio::test]
    async fn test_run_source_error() {
        let pipeline = Pipeline::new(FailingSource);
        let err = pipeline.run("example.com/missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Article download failed with status 404 for url https://example.com/missing");
    }

    #[tokio::test]
    async fn test_run_without_summary_is_neutral() {
        let pipeline = Pipeline::new(StaticSource::new("<html><body><div>Hi</div></body></html>"));
        let report = pipeline.run("http://example.com").await.unwrap();

        assert_eq!(report.url, "http://example.com");
        assert_eq!(report.article.title, None);
        assert_eq!(report.article.summary, None);
        assert_eq!(report.sentiment, Sentiment::neutral());
    }

    #[tokio::test]
    async fn test_run_with_custom_lexicon() {
        let lexicon = Lexicon::english().with_word("renovation", -1.0);
        let analyzer = SentimentAnalyzer::new().with_lexicon(lexicon);
        let pipeline = Pipeline::new(StaticSource::new(POSITIVE_HTML)).with_analyzer(analyzer);
        let report = pipeline.run("example.com").await.unwrap();

        assert!(report.sentiment.polarity < SentimentAnalyzer::new().analyze(&report.article.text).polarity);
        assert_eq!(pipeline.config().summary.max_sentences, 5);
    }

    #[tokio::test]
    async fn test_run_respects_summary_config() {
        let config = SummarifyConfig::builder().max_sentences(1).build();
        let pipeline = Pipeline::with_config(StaticSource::new(POSITIVE_HTML), config);
        let report = pipeline.run("example.com").await.unwrap();

        assert_eq!(report.article.summary.unwrap().lines().count(), 1);
    }
}
