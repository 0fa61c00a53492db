//! Body text extraction.
//!
//! Paragraphs vote for their parent and grandparent containers; the best
//! scoring container, discounted by its link density, supplies the article
//! text. Pages without scorable paragraphs fall back to `<article>`, then to
//! every paragraph outside navigation, footers and asides, and finally to an
//! empty body. Class and id hints are only read below `<body>`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parse::{Document, Element, collapse_whitespace};

/// Positive patterns that suggest an element contains main content
static POSITIVE_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(article|body|content|entry|hentry|h-entry|main|page|post|text|blog|story)").unwrap()
});

/// Negative patterns that suggest an element does NOT contain main content
static NEGATIVE_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(banner|breadcrumbs?|combx|comment|community|disqus|extra|foot|header|menu|related|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|newsletter|share|promo)",
    )
    .unwrap()
});

/// Containers whose paragraphs never count as article text
const SKIPPED_ANCESTORS: &[&str] = &["nav", "footer", "aside", "form", "header"];

/// Configuration for body text extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Paragraphs shorter than this (in characters) do not vote
    pub min_paragraph_chars: usize,
    /// Weight for positive class/ID patterns
    pub positive_weight: f64,
    /// Weight for negative class/ID patterns
    pub negative_weight: f64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_paragraph_chars: 25, positive_weight: 25.0, negative_weight: -25.0 }
    }
}

/// The result of body text extraction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedText {
    /// Paragraph text joined by blank lines
    pub text: String,
    /// Score of the winning container, 0.0 when a fallback was used
    pub top_score: f64,
    /// Number of paragraphs in `text`
    pub paragraph_count: usize,
}

struct Candidate<'a> {
    element: Element<'a>,
    score: f64,
}

/// Calculate the base score for a container based on its tag name
fn base_tag_score(element: &Element<'_>) -> f64 {
    match element.tag_name().as_str() {
        "article" => 10.0,
        "section" | "main" => 8.0,
        "div" => 5.0,
        "td" | "blockquote" => 3.0,
        "form" => -3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" | "header" | "footer" | "nav" => -5.0,
        _ => 0.0,
    }
}

/// Calculate the class/ID weight adjustment for an element
fn class_id_weight(element: &Element<'_>, config: &ExtractConfig) -> f64 {
    let names = element.attr("id").into_iter().chain(element.attr("class").into_iter().flat_map(str::split_whitespace));

    for name in names {
        if POSITIVE_PATTERNS.is_match(name) {
            return config.positive_weight;
        }
        if NEGATIVE_PATTERNS.is_match(name) {
            return config.negative_weight;
        }
    }

    0.0
}

/// Ratio of link text to all text, from 0.0 (no links) to 1.0
fn link_density(element: &Element<'_>) -> f64 {
    let text_length = element.text().chars().count();
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = element
        .select("a")
        .unwrap_or_default()
        .iter()
        .map(|link| link.text().chars().count())
        .sum();

    link_length as f64 / text_length as f64
}

/// Score contributed by a single paragraph: one point, one per comma, and
/// one per hundred characters up to three.
fn paragraph_score(text: &str) -> f64 {
    let commas = text.matches(',').count() as f64;
    let length_points = ((text.chars().count() / 100) as f64).min(3.0);
    1.0 + commas + length_points
}

/// Ancestors of `element` below `<body>`, nearest first.
fn ancestors_in_body<'a>(element: &Element<'a>) -> impl Iterator<Item = Element<'a>> {
    std::iter::successors(element.parent(), Element::parent)
        .take_while(|ancestor| !matches!(ancestor.tag_name().as_str(), "body" | "html"))
}

fn skipped_by_tag(element: &Element<'_>) -> bool {
    ancestors_in_body(element).any(|ancestor| SKIPPED_ANCESTORS.contains(&ancestor.tag_name().as_str()))
}

fn tagged_negative(element: &Element<'_>) -> bool {
    element
        .attr("id")
        .into_iter()
        .chain(element.attr("class").into_iter().flat_map(str::split_whitespace))
        .any(|name| NEGATIVE_PATTERNS.is_match(name) && !POSITIVE_PATTERNS.is_match(name))
}

fn in_skipped_container(element: &Element<'_>) -> bool {
    ancestors_in_body(element)
        .any(|ancestor| SKIPPED_ANCESTORS.contains(&ancestor.tag_name().as_str()) || tagged_negative(&ancestor))
}

fn paragraphs_of(element: &Element<'_>, skip: fn(&Element<'_>) -> bool) -> Vec<String> {
    element
        .select("p")
        .unwrap_or_default()
        .iter()
        .filter(|p| !skip(p))
        .map(Element::text_trimmed)
        .filter(|text| !text.is_empty())
        .collect()
}

fn joined(paragraphs: Vec<String>, top_score: f64) -> ExtractedText {
    let paragraph_count = paragraphs.len();
    ExtractedText { text: paragraphs.join("\n\n"), top_score, paragraph_count }
}

/// Extracts the article body text from a parsed document.
///
/// Never fails: a page with no recognizable paragraphs yields empty text.
pub fn extract_text(doc: &Document, config: &ExtractConfig) -> ExtractedText {
    let mut candidates: Vec<Candidate<'_>> = Vec::new();
    let mut index = HashMap::new();

    for paragraph in doc.select("p").unwrap_or_default() {
        let text = paragraph.text_trimmed();
        if text.chars().count() < config.min_paragraph_chars || in_skipped_container(&paragraph) {
            continue;
        }

        let score = paragraph_score(&text);
        let ancestors = [paragraph.parent(), paragraph.parent().and_then(|p| p.parent())];

        for (level, ancestor) in ancestors.into_iter().enumerate() {
            let Some(ancestor) = ancestor else { continue };
            let id = ancestor.element_ref().id();
            let slot = *index.entry(id).or_insert_with(|| {
                let initial = base_tag_score(&ancestor) + class_id_weight(&ancestor, config);
                candidates.push(Candidate { element: ancestor.clone(), score: initial });
                candidates.len() - 1
            });
            candidates[slot].score += if level == 0 { score } else { score / 2.0 };
        }
    }

    let best = candidates
        .iter()
        .map(|candidate| (candidate, candidate.score * (1.0 - link_density(&candidate.element))))
        .max_by(|(_, a), (_, b)| a.total_cmp(b));

    if let Some((candidate, score)) = best {
        let paragraphs = paragraphs_of(&candidate.element, in_skipped_container);
        if !paragraphs.is_empty() {
            tracing::debug!(tag = %candidate.element.tag_name(), score, "selected content container");
            return joined(paragraphs, score);
        }
    }

    if let Ok(articles) = doc.select("article")
        && let Some(article) = articles.first()
    {
        for skip in [in_skipped_container, skipped_by_tag] {
            let paragraphs = paragraphs_of(article, skip);
            if !paragraphs.is_empty() {
                return joined(paragraphs, 0.0);
            }
        }
        let text = article.text_trimmed();
        if !text.is_empty() {
            return joined(vec![text], 0.0);
        }
    }

    let all: Vec<String> = doc
        .select("p")
        .unwrap_or_default()
        .iter()
        .filter(|p| !skipped_by_tag(p))
        .map(|p| collapse_whitespace(&p.text()))
        .filter(|text| !text.is_empty())
        .collect();
    joined(all, 0.0)
}
