//! HTML parsing and DOM querying.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! downloaded HTML and navigating it with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use summarify_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{Result, SummarifyError};

/// A parsed HTML document.
///
/// A Document wraps a downloaded page together with the URL it came from,
/// which metadata extraction uses for site names and URL-embedded dates.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup still produces a document.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: None }
    }

    /// Parses HTML and records the URL it was downloaded from.
    ///
    /// An unparsable URL is ignored rather than rejected; the page itself is
    /// still usable.
    pub fn parse_with_url(html: &str, url: &str) -> Self {
        Self { html: Html::parse_document(html), base_url: Url::parse(url).ok() }
    }

    /// Gets the URL the document was downloaded from, if known.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Gets the raw `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SummarifyError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use summarify_core::Document;
    ///
    /// let doc = Document::parse(r#"<p class="a">First</p><p class="a">Second</p>"#);
    /// assert_eq!(doc.select("p.a").unwrap().len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(Element::new).collect())
    }

    /// Gets the trimmed text of the first element matching `selector`, if
    /// that text is non-empty.
    pub fn select_text(&self, selector: &str) -> Option<String> {
        let elements = self.select(selector).ok()?;
        elements.iter().map(|el| el.text_trimmed()).find(|text| !text.is_empty())
    }

    /// Gets the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        self.select_text("title")
    }

    /// Gets the `lang` attribute of the root `<html>` element.
    pub fn language(&self) -> Option<String> {
        self.html
            .root_element()
            .value()
            .attr("lang")
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's `ElementRef`.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the underlying `ElementRef`.
    pub fn element_ref(&self) -> ElementRef<'a> {
        self.element
    }

    /// Gets the outer HTML of this element.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the concatenated text of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text with runs of whitespace collapsed to single spaces.
    pub fn text_trimmed(&self) -> String {
        collapse_whitespace(&self.text())
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the closest ancestor that is an element.
    pub fn parent(&self) -> Option<Element<'a>> {
        self.element.parent().and_then(ElementRef::wrap).map(Element::new)
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SummarifyError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(Element::new).collect())
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SummarifyError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Collapse every run of whitespace into one space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
