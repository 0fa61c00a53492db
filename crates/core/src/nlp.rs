//! Keyword extraction and extractive summarization.
//!
//! Sentences are ranked by how much they share with the title, how densely
//! they carry the article's keywords, how close they are to an ideal length
//! and where they sit in the article. The best ones are returned in their
//! original order.

use std::collections::{HashMap, HashSet};

/// English stopwords ignored by keyword and title scoring
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "even", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "like", "many", "may", "me", "might", "more", "most", "much", "must", "my",
    "myself", "new", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "said", "same", "say", "says", "she", "should", "since", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "two", "under", "until", "up", "us", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "year",
    "years", "you", "your", "yours", "yourself", "yourselves",
];

/// Sentences shorter than this many characters are dropped
const MIN_SENTENCE_CHARS: usize = 10;

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "co", "vs", "e.g", "i.e"];

/// Configuration for summarization and keyword extraction
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Maximum number of sentences in the summary
    pub max_sentences: usize,
    /// Maximum number of keywords kept
    pub max_keywords: usize,
    /// Sentence length, in words, that receives the full length score
    pub ideal_sentence_words: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { max_sentences: 5, max_keywords: 10, ideal_sentence_words: 20 }
    }
}

/// A keyword and its weight
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub word: String,
    pub score: f64,
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Split text into lowercase words, stripping punctuation at both ends.
///
/// Apostrophes and hyphens inside a word are kept.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .replace('’', "'")
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split text into sentences on `.`, `!` or `?` followed by whitespace.
///
/// Closing quotes and brackets stay with the sentence they end. A period after
/// a common abbreviation or an initial does not end a sentence. Sentences
/// shorter than ten characters are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' && ends_with_abbreviation(&current) {
            current.push(c);
            continue;
        }
        current.push(c);
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        while let Some(&next) = chars.peek() {
            if matches!(next, '"' | '\'' | ')' | ']' | '”' | '’' | '.' | '!' | '?') {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if chars.peek().is_none_or(|next| next.is_whitespace()) {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

/// True when the last word of `text` is a known abbreviation or a single
/// capital initial.
fn ends_with_abbreviation(text: &str) -> bool {
    let Some(word) = text.split_whitespace().last() else { return false };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(initial), None) = (chars.next(), chars.next()) {
        return initial.is_uppercase();
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if sentence.chars().count() >= MIN_SENTENCE_CHARS {
        sentences.push(sentence);
    }
    current.clear();
}

/// Rank the most frequent non-stopword words of a text.
///
/// Each keyword scores `frequency / total_words * 1.5 + 1`; ties are broken
/// alphabetically so the result is stable.
pub fn keywords(text: &str, max_keywords: usize) -> Vec<Keyword> {
    let words = split_words(text);
    let total = words.len().max(1) as f64;

    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for word in words {
        if !is_stopword(&word) && word.chars().any(char::is_alphabetic) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|(word_a, freq_a), (word_b, freq_b)| freq_b.cmp(freq_a).then_with(|| word_a.cmp(word_b)));
    ranked.truncate(max_keywords);

    ranked
        .into_iter()
        .map(|(word, freq)| {
            let score = freq as f64 / total * 1.5 + 1.0;
            Keyword { word, score }
        })
        .collect()
}

/// Build an extractive summary of `text`, using `title` as a relevance hint.
///
/// Returns `None` when the text has no usable sentences.
pub fn summarize(title: &str, text: &str, config: &SummaryConfig) -> Option<String> {
    let sentences = split_sentences(text);
    if sentences.is_empty() || config.max_sentences == 0 {
        return None;
    }

    let keyword_scores: HashMap<String, f64> =
        keywords(text, config.max_keywords).into_iter().map(|keyword| (keyword.word, keyword.score)).collect();
    let title_words: HashSet<String> = split_words(title).into_iter().filter(|w| !is_stopword(w)).collect();

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let words = split_words(sentence);
            let title = title_score(&title_words, &words);
            let frequency = (summation_score(&words, &keyword_scores) + density_score(&words, &keyword_scores)) / 2.0
                * 10.0;
            let length = length_score(words.len(), config.ideal_sentence_words);
            let position = position_score(i + 1, sentences.len());
            (i, (title * 1.5 + frequency * 2.0 + length * 0.5 + position) / 4.0)
        })
        .collect();

    scored.sort_by(|(i_a, a), (i_b, b)| b.total_cmp(a).then_with(|| i_a.cmp(i_b)));
    scored.truncate(config.max_sentences);
    scored.sort_by_key(|(i, _)| *i);

    let summary = scored.iter().map(|(i, _)| sentences[*i].as_str()).collect::<Vec<_>>().join("\n");
    Some(summary)
}

/// Share of the title's content words that appear in the sentence.
fn title_score(title_words: &HashSet<String>, sentence: &[String]) -> f64 {
    if title_words.is_empty() {
        return 0.0;
    }
    let hits = sentence.iter().filter(|w| !is_stopword(w) && title_words.contains(*w)).count();
    hits as f64 / title_words.len() as f64
}

/// 1.0 at the ideal length, falling off linearly on both sides.
fn length_score(words: usize, ideal: usize) -> f64 {
    if ideal == 0 {
        return 0.0;
    }
    let ideal = ideal as f64;
    (1.0 - (ideal - words as f64).abs() / ideal).max(0.0)
}

/// Opening and closing sentences carry more weight than the middle.
fn position_score(index: usize, total: usize) -> f64 {
    let normalized = index as f64 / total as f64;
    match normalized {
        n if n > 0.0 && n <= 0.1 => 0.17,
        n if n <= 0.2 => 0.23,
        n if n <= 0.3 => 0.14,
        n if n <= 0.4 => 0.08,
        n if n <= 0.5 => 0.05,
        n if n <= 0.6 => 0.04,
        n if n <= 0.7 => 0.06,
        n if n <= 0.8 => 0.04,
        n if n <= 0.9 => 0.04,
        n if n <= 1.0 => 0.15,
        _ => 0.0,
    }
}

/// Sum of keyword weights in the sentence, scaled by its length.
fn summation_score(words: &[String], keywords: &HashMap<String, f64>) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: f64 = words.iter().filter_map(|w| keywords.get(w)).sum();
    total / words.len() as f64 / 10.0
}

/// Rewards keywords that appear close to each other.
fn density_score(words: &[String], keywords: &HashMap<String, f64>) -> f64 {
    let hits: Vec<(usize, f64)> =
        words.iter().enumerate().filter_map(|(i, w)| keywords.get(w).map(|score| (i, *score))).collect();
    if hits.len() < 2 {
        return 0.0;
    }

    let unique = hits.iter().map(|(i, _)| &words[*i]).collect::<HashSet<_>>().len() as f64;
    let sum: f64 = hits
        .windows(2)
        .map(|pair| {
            let distance = (pair[1].0 - pair[0].0) as f64;
            pair[0].1 * pair[1].1 / (distance * distance)
        })
        .sum();

    let k = unique + 1.0;
    sum / (k * (k + 1.0))
}
