//! The output surface: five read-only display slots.
//!
//! Every slot is locked between writes. A write goes through
//! [`RenderTarget::set_field`], which unlocks the slot, clears it, writes the
//! new text and locks it again. [`render`] maps the outcome of one request
//! onto a target: a [`Report`] fills all five slots, an error rewrites only
//! the title slot and leaves the others as they were.

use std::fmt;

use crate::metadata::format_publish_date;
use crate::pipeline::Report;
use crate::{Result, SummarifyError};

pub const NO_TITLE: &str = "No Title Found";
pub const NO_AUTHOR: &str = "No Author Found";
pub const NO_DATE: &str = "No Date Available";
pub const NO_SUMMARY: &str = "No Summary Available";

/// Prefix of the text shown in the title slot when a request fails.
pub const ERROR_PREFIX: &str = "Error: ";

/// One display slot of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    PublicationDate,
    Summary,
    Sentiment,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [Field::Title, Field::Author, Field::PublicationDate, Field::Summary, Field::Sentiment];

    /// Caption shown next to the slot.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::PublicationDate => "Publication Date",
            Field::Summary => "Summary",
            Field::Sentiment => "Sentiment Analysis",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Text of one slot plus its lock flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub text: String,
    pub locked: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self { text: String::new(), locked: true }
    }
}

/// Anything that can display the five output fields.
///
/// Implementors provide the lock primitives; the provided methods keep the
/// unlock, clear, write, lock order.
pub trait RenderTarget {
    fn unlock(&mut self, field: Field);

    fn lock(&mut self, field: Field);

    /// Blanks an unlocked slot.
    ///
    /// # Errors
    ///
    /// [`SummarifyError::SlotLocked`] when the slot is locked.
    fn clear_field(&mut self, field: Field) -> Result<()>;

    /// Appends text to an unlocked slot.
    ///
    /// # Errors
    ///
    /// [`SummarifyError::SlotLocked`] when the slot is locked.
    fn write_field(&mut self, field: Field, text: &str) -> Result<()>;

    /// Replaces the text of a slot. The slot is locked afterwards, even when
    /// the write fails.
    fn set_field(&mut self, field: Field, text: &str) -> Result<()> {
        self.unlock(field);
        let written = self.clear_field(field).and_then(|()| self.write_field(field, text));
        self.lock(field);
        written
    }

    /// Shows `Error: {message}` in the title slot.
    fn show_error(&mut self, message: &str) -> Result<()> {
        self.set_field(Field::Title, &format!("{}{}", ERROR_PREFIX, message))
    }

    /// Blanks every slot.
    fn clear(&mut self) -> Result<()> {
        Field::ALL.into_iter().try_for_each(|field| self.set_field(field, ""))
    }
}

/// In-memory output surface. Slots start empty and locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSurface {
    slots: [Slot; 5],
}

impl OutputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> &str {
        &self.slots[field.index()].text
    }

    pub fn is_locked(&self, field: Field) -> bool {
        self.slots[field.index()].locked
    }

    pub fn slot(&self, field: Field) -> &Slot {
        &self.slots[field.index()]
    }

    /// Fields and their text in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.text(field)))
    }

    fn unlocked_slot(&mut self, field: Field) -> Result<&mut Slot> {
        let slot = &mut self.slots[field.index()];
        if slot.locked {
            return Err(SummarifyError::SlotLocked(field));
        }
        Ok(slot)
    }
}

impl RenderTarget for OutputSurface {
    fn unlock(&mut self, field: Field) {
        self.slots[field.index()].locked = false;
    }

    fn lock(&mut self, field: Field) {
        self.slots[field.index()].locked = true;
    }

    fn clear_field(&mut self, field: Field) -> Result<()> {
        self.unlocked_slot(field)?.text.clear();
        Ok(())
    }

    fn write_field(&mut self, field: Field, text: &str) -> Result<()> {
        self.unlocked_slot(field)?.text.push_str(text);
        Ok(())
    }
}

/// Display text of each field of a report, placeholders included.
pub fn report_fields(report: &Report) -> [(Field, String); 5] {
    let article = &report.article;

    let title = article.title.clone().unwrap_or_else(|| NO_TITLE.to_string());
    let authors = if article.authors.is_empty() { NO_AUTHOR.to_string() } else { article.authors.join(", ") };
    let date = article.publish_date.as_ref().map(format_publish_date).unwrap_or_else(|| NO_DATE.to_string());
    let summary = article.summary.clone().unwrap_or_else(|| NO_SUMMARY.to_string());

    [
        (Field::Title, title),
        (Field::Author, authors),
        (Field::PublicationDate, date),
        (Field::Summary, summary),
        (Field::Sentiment, report.sentiment.to_string()),
    ]
}

/// Renders the outcome of one request onto a target.
///
/// On success all five slots are rewritten. On failure only the title slot
/// is rewritten and the other slots keep whatever the previous request left.
pub fn render<T: RenderTarget + ?Sized>(outcome: &Result<Report>, target: &mut T) -> Result<()> {
    match outcome {
        Ok(report) => {
            for (field, text) in report_fields(report) {
                target.set_field(field, &text)?;
            }
            Ok(())
        }
        Err(e) => target.show_error(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::metadata::Metadata;
    use crate::sentiment::Sentiment;
    use time::macros::datetime;

    fn report(metadata: Metadata, summary: Option<&str>, sentiment: Sentiment) -> Report {
        let mut article = Article::from_parts("https://example.com/article", metadata, String::new());
        article.summary = summary.map(str::to_string);
        Report { url: "https://example.com/article".to_string(), article, sentiment }
    }

    fn full_report() -> Report {
        let metadata = Metadata {
            title: Some("Harbor Festival Returns".to_string()),
            authors: vec!["Ana Ruiz".to_string(), "Tom Berg".to_string()],
            publish_date: Some(datetime!(2024-06-01 12:00:00 UTC)),
            ..Default::default()
        };
        report(metadata, Some("The festival is back.\nCrowds were happy."), Sentiment::new(0.25, 2))
    }

    #[test]
    fn test_slots_start_empty_and_locked() {
        let surface = OutputSurface::new();
        for field in Field::ALL {
            assert_eq!(surface.text(field), "");
            assert!(surface.is_locked(field));
        }
    }

    #[test]
    fn test_write_to_locked_slot_fails() {
        let mut surface = OutputSurface::new();
        let err = surface.write_field(Field::Summary, "text").unwrap_err();
        assert!(matches!(err, SummarifyError::SlotLocked(Field::Summary)));
        assert!(matches!(surface.clear_field(Field::Title), Err(SummarifyError::SlotLocked(Field::Title))));
        assert_eq!(surface.text(Field::Summary), "");
    }

    #[test]
    fn test_set_field_relocks() {
        let mut surface = OutputSurface::new();
        surface.set_field(Field::Author, "first").unwrap();
        surface.set_field(Field::Author, "second").unwrap();

        assert_eq!(surface.text(Field::Author), "second");
        assert!(surface.is_locked(Field::Author));
    }

    #[test]
    fn test_manual_unlock_write_lock() {
        let mut surface = OutputSurface::new();
        surface.unlock(Field::Title);
        surface.write_field(Field::Title, "Hello").unwrap();
        surface.write_field(Field::Title, ", world").unwrap();
        surface.lock(Field::Title);

        assert_eq!(surface.text(Field::Title), "Hello, world");
        assert!(surface.is_locked(Field::Title));
    }

    #[test]
    fn test_render_success_fills_every_slot() {
        let mut surface = OutputSurface::new();
        render(&Ok(full_report()), &mut surface).unwrap();

        assert_eq!(surface.text(Field::Title), "Harbor Festival Returns");
        assert_eq!(surface.text(Field::Author), "Ana Ruiz, Tom Berg");
        assert_eq!(surface.text(Field::PublicationDate), "2024-06-01 12:00:00+00:00");
        assert_eq!(surface.text(Field::Summary), "The festival is back.\nCrowds were happy.");
        assert_eq!(surface.text(Field::Sentiment), "Polarity: 0.25, Sentiment: Positive");
        for (field, text) in surface.fields() {
            assert!(!text.is_empty());
            assert!(!text.contains("Error:"));
            assert!(surface.is_locked(field));
        }
    }

    #[test]
    fn test_render_placeholders() {
        let mut surface = OutputSurface::new();
        render(&Ok(report(Metadata::default(), None, Sentiment::neutral())), &mut surface).unwrap();

        assert_eq!(surface.text(Field::Title), NO_TITLE);
        assert_eq!(surface.text(Field::Author), NO_AUTHOR);
        assert_eq!(surface.text(Field::PublicationDate), NO_DATE);
        assert_eq!(surface.text(Field::Summary), NO_SUMMARY);
        assert_eq!(surface.text(Field::Sentiment), "Polarity: 0.0, Sentiment: Neutral");
    }

    #[test]
    fn test_render_error_keeps_stale_slots() {
        let mut surface = OutputSurface::new();
        render(&Ok(full_report()), &mut surface).unwrap();
        render(&Err(SummarifyError::MissingUrl), &mut surface).unwrap();

        assert_eq!(surface.text(Field::Title), "Error: Please enter a valid URL");
        assert!(surface.is_locked(Field::Title));
        assert_eq!(surface.text(Field::Author), "Ana Ruiz, Tom Berg");
        assert_eq!(surface.text(Field::Summary), "The festival is back.\nCrowds were happy.");
    }

    #[test]
    fn test_render_error_on_fresh_surface() {
        let mut surface = OutputSurface::new();
        render(&Err(SummarifyError::DownloadFailed), &mut surface).unwrap();

        assert_eq!(surface.text(Field::Title), "Error: Failed to download the article");
        assert_eq!(surface.text(Field::Author), "");
        assert_eq!(surface.text(Field::Sentiment), "");
    }

    #[test]
    fn test_clear() {
        let mut surface = OutputSurface::new();
        render(&Ok(full_report()), &mut surface).unwrap();
        surface.clear().unwrap();

        assert_eq!(surface, OutputSurface::new());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::PublicationDate.to_string(), "PublicationDate");
        assert_eq!(Field::PublicationDate.label(), "Publication Date");
        assert_eq!(Field::Sentiment.label(), "Sentiment Analysis");
    }
}
