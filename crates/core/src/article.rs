//! The article record produced by one request.
//!
//! An [`Article`] is built in two steps: [`Article::parse`] reads metadata and
//! body text out of downloaded HTML, and [`Article::nlp`] derives keywords
//! and the extractive summary from that text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::extract::{ExtractConfig, extract_text};
use crate::metadata::format_publish_date;
use crate::nlp::{self, SummaryConfig};
use crate::{Document, Metadata};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[\w'-]+\b").unwrap());

/// Everything extracted from one page.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Normalized URL the article was requested from.
    pub url: String,

    pub title: Option<String>,

    /// Author names in page order, possibly empty.
    pub authors: Vec<String>,

    #[serde(serialize_with = "serialize_date")]
    pub publish_date: Option<OffsetDateTime>,

    /// Extractive summary, filled in by [`Article::nlp`].
    pub summary: Option<String>,

    /// Most frequent content words, filled in by [`Article::nlp`].
    pub keywords: Vec<String>,

    /// Body text, paragraphs separated by blank lines.
    pub text: String,

    pub description: Option<String>,
    pub meta_keywords: Vec<String>,
    pub site_name: Option<String>,
    pub language: Option<String>,

    /// Word count of `text`.
    pub word_count: usize,
}

impl Article {
    /// Parses downloaded HTML into an article.
    ///
    /// Parsing never fails: missing fields stay `None` or empty.
    pub fn parse(url: &str, html: &str, config: &ExtractConfig) -> Self {
        let doc = Document::parse_with_url(html, url);
        let metadata = doc.extract_metadata();
        let extracted = extract_text(&doc, config);

        Self::from_parts(url, metadata, extracted.text)
    }

    /// Assembles an article from already extracted pieces.
    pub fn from_parts(url: &str, metadata: Metadata, text: String) -> Self {
        let word_count = count_words(&text);

        Self {
            url: url.to_string(),
            title: metadata.title,
            authors: metadata.authors,
            publish_date: metadata.publish_date,
            summary: None,
            keywords: Vec::new(),
            text,
            description: metadata.description,
            meta_keywords: metadata.meta_keywords,
            site_name: metadata.site_name,
            language: metadata.language,
            word_count,
        }
    }

    /// Derives keywords and the summary from the body text.
    pub fn nlp(&mut self, config: &SummaryConfig) {
        self.keywords = nlp::keywords(&self.text, config.max_keywords).into_iter().map(|k| k.word).collect();
        self.summary = nlp::summarize(self.title.as_deref().unwrap_or_default(), &self.text, config);
    }
}

fn serialize_date<S: Serializer>(date: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_some(&format_publish_date(date)),
        None => serializer.serialize_none(),
    }
}

/// Count words in text using a simple regex pattern
fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}
