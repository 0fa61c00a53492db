pub mod article;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod metadata;
pub mod nlp;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod sentiment;
pub mod surface;

pub use article::Article;
pub use config::{SummarifyConfig, SummarifyConfigBuilder};
pub use error::{Result, SummarifyError};
pub use extract::{ExtractConfig, ExtractedText, extract_text};
#[cfg(feature = "fetch")]
pub use fetch::{HttpSource, fetch_url};
pub use fetch::{ArticleSource, FetchConfig, FileSource, StaticSource, fetch_file};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, report_to_json, surface_to_text};
pub use metadata::{Metadata, format_publish_date, parse_date};
pub use nlp::{Keyword, SummaryConfig, keywords, summarize};
pub use normalize::normalize_url;
pub use parse::{Document, Element};
pub use pipeline::{Pipeline, Report};
pub use sentiment::{Lexicon, Sentiment, SentimentAnalyzer, SentimentLabel};
pub use surface::{Field, OutputSurface, RenderTarget, Slot, render};
