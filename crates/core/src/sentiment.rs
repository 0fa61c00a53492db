//! Lexicon-based sentiment scoring.
//!
//! Every word found in the lexicon is an assessment. An intensifier right
//! before it scales the assessment, and a negation up to three words before
//! it flips and halves it. The polarity of a text is the mean of its
//! assessments, clamped to `[-1, 1]`.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::nlp::split_words;

/// Polarity of common English opinion words, from -1.0 to 1.0
const POLARITY_WORDS: &[(&str, f64)] = &[
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("best", 1.0),
    ("perfect", 1.0),
    ("outstanding", 0.9),
    ("brilliant", 0.9),
    ("superb", 0.9),
    ("beautiful", 0.85),
    ("great", 0.8),
    ("happy", 0.8),
    ("impressive", 0.8),
    ("delighted", 0.8),
    ("successful", 0.75),
    ("remarkable", 0.75),
    ("good", 0.7),
    ("glad", 0.7),
    ("enjoy", 0.6),
    ("amazing", 0.6),
    ("nice", 0.6),
    ("pleased", 0.6),
    ("exciting", 0.6),
    ("fantastic", 0.6),
    ("helpful", 0.55),
    ("love", 0.5),
    ("better", 0.5),
    ("popular", 0.5),
    ("improved", 0.5),
    ("win", 0.5),
    ("welcome", 0.5),
    ("benefit", 0.45),
    ("strong", 0.43),
    ("hope", 0.4),
    ("safe", 0.4),
    ("easy", 0.4),
    ("fair", 0.35),
    ("progress", 0.35),
    ("success", 0.3),
    ("positive", 0.23),
    ("growth", 0.2),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("horrible", -1.0),
    ("disastrous", -0.9),
    ("tragic", -0.85),
    ("hate", -0.8),
    ("angry", -0.7),
    ("bad", -0.7),
    ("dangerous", -0.6),
    ("failed", -0.6),
    ("fear", -0.6),
    ("crisis", -0.55),
    ("sad", -0.5),
    ("wrong", -0.5),
    ("harmful", -0.5),
    ("disappointing", -0.5),
    ("worried", -0.45),
    ("worse", -0.4),
    ("poor", -0.4),
    ("difficult", -0.4),
    ("problem", -0.4),
    ("weak", -0.375),
    ("risk", -0.35),
    ("decline", -0.35),
    ("loss", -0.35),
    ("negative", -0.3),
    ("failure", -0.3),
    ("concern", -0.3),
    ("unfortunately", -0.3),
];

/// Multipliers for the assessment that immediately follows
const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("very", 1.3),
    ("highly", 1.3),
    ("so", 1.2),
    ("quite", 1.1),
    ("fairly", 0.8),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nobody", "nothing", "isn't", "wasn't", "aren't", "weren't", "don't",
    "doesn't", "didn't", "can't", "cannot", "couldn't", "won't", "wouldn't", "shouldn't", "hardly",
];

/// Factor applied to an assessment inside a negation window
const NEGATION_FACTOR: f64 = -0.5;

/// Three-way sentiment label derived from the sign of a polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Positive above zero, Negative below, Neutral at zero (and for NaN).
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// The sentiment of one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub label: SentimentLabel,
    /// Number of lexicon words that contributed to the polarity
    pub assessments: usize,
}

impl Sentiment {
    pub fn new(polarity: f64, assessments: usize) -> Self {
        let polarity = if polarity == 0.0 || polarity.is_nan() { 0.0 } else { polarity };
        Self { polarity, label: SentimentLabel::from_polarity(polarity), assessments }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0)
    }
}

/// Renders as `Polarity: 0.25, Sentiment: Positive`.
impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polarity: {}, Sentiment: {}", format_polarity(self.polarity), self.label)
    }
}

/// Shortest round-trip float text, always with a fractional part (`0.0`, `-1.0`, `0.125`).
pub fn format_polarity(polarity: f64) -> String {
    format!("{:?}", polarity)
}

/// Word polarities, intensifiers and negations used by [`SentimentAnalyzer`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: Vec<String>,
}

impl Lexicon {
    pub fn english() -> Self {
        Self {
            words: POLARITY_WORDS.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
            intensifiers: INTENSIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Adds or replaces a word; the score is clamped to `[-1, 1]`.
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words.insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    negation_window: usize,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self { lexicon: Lexicon::english(), negation_window: 3 }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Score a text. Text without any lexicon words is Neutral at 0.0.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let mut total = 0.0;
        let mut assessments = 0usize;
        let mut multiplier = 1.0;
        let mut negation_left = 0usize;

        for word in split_words(text) {
            if self.lexicon.is_negation(&word) {
                negation_left = self.negation_window;
                multiplier = 1.0;
                continue;
            }

            if let Some(intensity) = self.lexicon.intensity(&word) {
                multiplier = intensity;
                negation_left = negation_left.saturating_sub(1);
                continue;
            }

            if let Some(polarity) = self.lexicon.polarity(&word) {
                let mut score = polarity * multiplier;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                }
                total += score;
                assessments += 1;
                negation_left = 0;
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            multiplier = 1.0;
        }

        if assessments == 0 {
            return Sentiment::neutral();
        }

        Sentiment::new((total / assessments as f64).clamp(-1.0, 1.0), assessments)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
