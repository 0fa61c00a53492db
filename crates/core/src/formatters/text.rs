use crate::surface::OutputSurface;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Underline each field caption
    pub underline_labels: bool,
}

/// Plain text formatter for printing the output form
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, surface: &OutputSurface) -> String {
        surface_to_text(surface, &self.config)
    }
}

/// Render every field of the surface as a captioned block.
///
/// Empty slots are printed with their caption and no text.
pub fn surface_to_text(surface: &OutputSurface, config: &TextConfig) -> String {
    let blocks: Vec<String> = surface
        .fields()
        .map(|(field, text)| {
            let label = field.label();
            let mut block = format!("{}:", label);
            if config.underline_labels {
                block.push('\n');
                block.push_str(&"=".repeat(label.len() + 1));
            }
            if !text.is_empty() {
                block.push('\n');
                block.push_str(&wrap_text(text, config.line_width));
            }
            block
        })
        .collect();

    blocks.join("\n\n")
}

/// Wrap each line of text to the specified width
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() { String::new() } else { wrap_words(&words, width) }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Field, RenderTarget};

    fn filled_surface() -> OutputSurface {
        let mut surface = OutputSurface::new();
        surface.set_field(Field::Title, "A Title").unwrap();
        surface.set_field(Field::Author, "No Author Found").unwrap();
        surface.set_field(Field::PublicationDate, "No Date Available").unwrap();
        surface.set_field(Field::Summary, "First sentence.\nSecond sentence.").unwrap();
        surface.set_field(Field::Sentiment, "Polarity: 0.0, Sentiment: Neutral").unwrap();
        surface
    }

    #[test]
    fn test_surface_to_text() {
        let text = surface_to_text(&filled_surface(), &TextConfig::default());

        assert!(text.starts_with("Title:\nA Title\n\nAuthor:\nNo Author Found"));
        assert!(text.contains("Summary:\nFirst sentence.\nSecond sentence."));
        assert!(text.ends_with("Sentiment Analysis:\nPolarity: 0.0, Sentiment: Neutral"));
    }

    #[test]
    fn test_empty_slots_print_caption_only() {
        let mut surface = OutputSurface::new();
        surface.show_error("Please enter a valid URL").unwrap();
        let text = surface_to_text(&surface, &TextConfig::default());

        assert!(text.starts_with("Title:\nError: Please enter a valid URL\n\nAuthor:\n\nPublication Date:"));
    }

    #[test]
    fn test_underlined_labels() {
        let config = TextConfig { underline_labels: true, ..Default::default() };
        let text = surface_to_text(&filled_surface(), &config);
        assert!(text.starts_with("Title:\n======\nA Title"));
    }

    #[test]
    fn test_wrap_words() {
        let words = vec!["hello", "world", "this", "is", "a", "test"];
        assert_eq!(wrap_words(&words, 10), "hello\nworld this\nis a test");
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        let wrapped = wrap_text("one two three\nfour", 7);
        assert_eq!(wrapped, "one two\nthree\nfour");
    }

    #[test]
    fn test_wrap_text_with_zero_width() {
        let text = "This is a line";
        assert_eq!(wrap_text(text, 0), text);
    }

    #[test]
    fn test_text_formatter() {
        let surface = filled_surface();
        let config = TextConfig { line_width: 12, ..Default::default() };
        let formatter = TextFormatter::new(config.clone());

        assert_eq!(formatter.format(&surface), surface_to_text(&surface, &config));
    }
}
