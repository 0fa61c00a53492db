//! Page metadata: title, authors, publication date and the descriptive
//! `<meta>` tags.
//!
//! Each field tries JSON-LD first, then Open Graph and named `<meta>` tags,
//! then visible markup such as `<title>`, bylines and `<time>` elements.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

use crate::Document;
use crate::parse::collapse_whitespace;

static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*(written\s+)?by[:\s]+").unwrap());
static AUTHOR_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+and\s+|,|&|\|").unwrap());
static URL_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d{4})/(\d{1,2})/(\d{1,2})(?:/|$)").unwrap());
static TITLE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+[|\-–—»]\s+").unwrap());

/// Metadata extracted from the head and byline of a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub publish_date: Option<OffsetDateTime>,
    pub description: Option<String>,
    pub meta_keywords: Vec<String>,
    pub site_name: Option<String>,
    pub language: Option<String>,
}

impl Document {
    /// Extract title with priority fallback:
    /// 1. JSON-LD `headline`
    /// 2. Open Graph `og:title`
    /// 3. Twitter `twitter:title`
    /// 4. Meta `title` / `DC.title`
    /// 5. `<title>` element, with a site-name suffix removed
    /// 6. First `<h1>` element
    pub fn extract_title(&self) -> Option<String> {
        if let Some(headline) = self.json_ld_string("headline") {
            return Some(headline);
        }

        for name in ["og:title", "twitter:title", "title", "DC.title"] {
            if let Some(title) = self.get_meta_content(name) {
                return Some(title);
            }
        }

        if let Some(title) = self.title() {
            return Some(strip_site_suffix(&title));
        }

        self.select_text("h1")
    }

    /// Extract authors in document order, deduplicated case-insensitively.
    ///
    /// The first source that yields any name wins:
    /// 1. JSON-LD `author` (string, object or array)
    /// 2. Meta `author` / `article:author` / `DC.creator`
    /// 3. `[rel="author"]` link text
    /// 4. `[itemprop="author"]` content
    /// 5. Class/ID containing "author", "byline"
    pub fn extract_authors(&self) -> Vec<String> {
        if let Some(author) = self.json_ld_value("author") {
            let names = split_authors(json_ld_author_names(&author));
            if !names.is_empty() {
                return names;
            }
        }

        let meta: Vec<String> = ["author", "article:author", "DC.creator"]
            .iter()
            .filter_map(|name| self.get_meta_content(name))
            .filter(|value| !value.starts_with("http"))
            .collect();
        let names = split_authors(meta);
        if !names.is_empty() {
            return names;
        }

        for selector in ["[rel=\"author\"]", "[itemprop=\"author\"]"] {
            if let Some(text) = self.select_text(selector) {
                let names = split_authors(vec![text]);
                if !names.is_empty() {
                    return names;
                }
            }
        }

        let patterns = ["byline", "author", "by-author", "writer"];
        for pattern in &patterns {
            for attr in ["class", "id"] {
                let selector = format!("[{}*=\"{}\"]", attr, pattern);
                if let Ok(elements) = self.select(&selector) {
                    for el in elements.iter().take(3) {
                        let text = el.text_trimmed();
                        if !text.is_empty() && text.len() < 100 {
                            let names = split_authors(vec![text]);
                            if !names.is_empty() {
                                return names;
                            }
                        }
                    }
                }
            }
        }

        Vec::new()
    }

    /// Extract the publication date with priority fallback:
    /// 1. JSON-LD `datePublished`
    /// 2. Meta `article:published_time`
    /// 3. `<time datetime="">` element
    /// 4. Meta `date` / `pubdate` / `DC.date`
    /// 5. A `/YYYY/MM/DD/` path segment in the source URL
    pub fn extract_publish_date(&self) -> Option<OffsetDateTime> {
        let mut raw = Vec::new();
        raw.extend(self.json_ld_string("datePublished"));
        raw.extend(self.get_meta_content("article:published_time"));
        if let Ok(elements) = self.select("time[datetime]") {
            raw.extend(elements.iter().filter_map(|el| el.attr("datetime")).map(str::to_string));
        }
        for name in ["date", "pubdate", "DC.date"] {
            raw.extend(self.get_meta_content(name));
        }

        raw.iter()
            .find_map(|value| parse_date(value))
            .or_else(|| self.base_url().and_then(|url| date_from_url_path(url.path())))
    }

    /// Extract the description with priority fallback:
    /// 1. JSON-LD `description`
    /// 2. Open Graph `og:description`
    /// 3. Meta `description`
    pub fn extract_description(&self) -> Option<String> {
        self.json_ld_string("description")
            .or_else(|| self.get_meta_content("og:description"))
            .or_else(|| self.get_meta_content("description"))
    }

    /// Extract comma-separated meta keywords.
    pub fn extract_meta_keywords(&self) -> Vec<String> {
        self.get_meta_content("keywords")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|keyword| !keyword.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract site name with priority fallback:
    /// 1. JSON-LD `publisher.name`
    /// 2. Open Graph `og:site_name`
    /// 3. Domain from URL
    pub fn extract_site_name(&self) -> Option<String> {
        if let Some(publisher) = self.json_ld_value("publisher")
            && let Some(name) = publisher.get("name").and_then(Value::as_str)
        {
            return Some(name.to_string());
        }

        if let Some(site) = self.get_meta_content("og:site_name") {
            return Some(site);
        }

        self.base_url().and_then(|url| url.domain()).map(str::to_string)
    }

    /// Extract all metadata at once
    pub fn extract_metadata(&self) -> Metadata {
        Metadata {
            title: self.extract_title(),
            authors: self.extract_authors(),
            publish_date: self.extract_publish_date(),
            description: self.extract_description(),
            meta_keywords: self.extract_meta_keywords(),
            site_name: self.extract_site_name(),
            language: self.language(),
        }
    }

    /// Get meta tag content by name or property attribute
    fn get_meta_content(&self, attr: &str) -> Option<String> {
        for key in ["name", "property"] {
            let selector = format!("meta[{}=\"{}\"]", key, attr);
            if let Ok(elements) = self.select(&selector)
                && let Some(content) = elements.iter().find_map(|el| el.attr("content"))
            {
                let content = collapse_whitespace(content);
                if !content.is_empty() {
                    return Some(content);
                }
            }
        }

        None
    }

    /// Parse every JSON-LD block into a flat list of objects, unwrapping
    /// top-level arrays and `@graph` containers.
    fn json_ld_objects(&self) -> Vec<Value> {
        let mut objects = Vec::new();
        if let Ok(elements) = self.select("script[type=\"application/ld+json\"]") {
            for el in elements.iter() {
                if let Ok(value) = serde_json::from_str::<Value>(el.text().trim()) {
                    flatten_json_ld(value, &mut objects);
                }
            }
        }
        objects
    }

    fn json_ld_value(&self, key: &str) -> Option<Value> {
        self.json_ld_objects().into_iter().find_map(|mut obj| obj.get_mut(key).map(Value::take))
    }

    fn json_ld_string(&self, key: &str) -> Option<String> {
        self.json_ld_objects()
            .iter()
            .filter_map(|obj| obj.get(key).and_then(Value::as_str))
            .map(collapse_whitespace)
            .find(|value| !value.is_empty())
    }
}

fn flatten_json_ld(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.into_iter().for_each(|item| flatten_json_ld(item, out)),
        Value::Object(mut map) => {
            if let Some(graph) = map.remove("@graph") {
                flatten_json_ld(graph, out);
            }
            if !map.is_empty() {
                out.push(Value::Object(map));
            }
        }
        _ => {}
    }
}

/// Collect author names from a JSON-LD `author` field.
/// Handles string, object and array formats.
fn json_ld_author_names(author: &Value) -> Vec<String> {
    match author {
        Value::String(name) => vec![name.clone()],
        Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(|n| vec![n.to_string()]).unwrap_or_default(),
        Value::Array(items) => items.iter().flat_map(json_ld_author_names).collect(),
        _ => Vec::new(),
    }
}

/// Strip bylines, split joined names, and deduplicate.
fn split_authors(raw: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for value in raw {
        let value = collapse_whitespace(&value);
        let value = BYLINE_PREFIX.replace(&value, "");
        for part in AUTHOR_SEPARATORS.split(&value) {
            let name = part.trim();
            let plausible =
                name.len() >= 2 && name.len() <= 100 && name.chars().any(char::is_alphabetic) && !name.contains("://");
            if plausible && !names.iter().any(|known| known.eq_ignore_ascii_case(name)) {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Keep the longest piece of a `<title>` split on common site-name delimiters.
fn strip_site_suffix(title: &str) -> String {
    let title = collapse_whitespace(title);
    TITLE_DELIMITERS
        .split(&title)
        .max_by_key(|piece| piece.chars().count())
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .unwrap_or(title)
}

/// Parse a publication date in any of the common page formats.
///
/// Values without an offset are taken as UTC.
pub fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();

    if let Ok(date) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(date);
    }
    if let Ok(date) = OffsetDateTime::parse(raw, &Rfc2822) {
        return Some(date);
    }

    let compact_offset = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    if let Ok(date) = OffsetDateTime::parse(raw, compact_offset) {
        return Some(date);
    }

    let naive_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let naive_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let naive_minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    for format in [naive_t, naive_space, naive_minutes] {
        if let Ok(date) = PrimitiveDateTime::parse(raw, format) {
            return Some(date.assume_utc());
        }
    }

    let date_only = format_description!("[year]-[month]-[day]");
    let prefix = raw.get(..10).unwrap_or(raw);
    Date::parse(prefix, date_only).ok().map(|date| date.midnight().assume_utc())
}

/// Find a `/YYYY/MM/DD/` segment in a URL path.
fn date_from_url_path(path: &str) -> Option<OffsetDateTime> {
    let caps = URL_DATE.captures(path)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u8 = caps[2].parse().ok()?;
    let day: u8 = caps[3].parse().ok()?;
    let month = Month::try_from(month).ok()?;

    Date::from_calendar_date(year, month, day).ok().map(|date| date.midnight().assume_utc())
}

/// Render a publication date as `YYYY-MM-DD HH:MM:SS+HH:MM`.
pub fn format_publish_date(date: &OffsetDateTime) -> String {
    let format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]");
    date.format(format).unwrap_or_else(|_| date.to_string())
}
