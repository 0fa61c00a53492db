//! Library API integration tests
use summarify_core::*;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(path).unwrap()
}

fn fixture_pipeline(name: &str) -> Pipeline<StaticSource> {
    Pipeline::new(StaticSource::new(fixture(name)))
}

#[tokio::test]
async fn test_article_scenario() {
    let report = fixture_pipeline("article.html").run("example.com/article").await.unwrap();

    assert_eq!(report.url, "https://example.com/article");
    assert_eq!(report.article.title.as_deref(), Some("Community Garden Wins Regional Award"));
    assert_eq!(report.article.authors, vec!["Maria Lopez".to_string(), "James Chen".to_string()]);
    assert_eq!(report.article.site_name.as_deref(), Some("Riverside Gazette"));
    assert_eq!(report.article.language.as_deref(), Some("en"));
    assert_eq!(report.article.meta_keywords, vec!["garden", "community", "award"]);
    assert_eq!(report.sentiment.label, SentimentLabel::Positive);

    let text = &report.article.text;
    assert!(text.starts_with("The Riverside community garden"));
    assert!(!text.contains("newsletter"));
    assert!(!text.contains("Copyright"));
    assert_eq!(report.article.keywords.first().map(String::as_str), Some("garden"));

    let mut surface = OutputSurface::new();
    render(&Ok(report), &mut surface).unwrap();

    assert_eq!(surface.text(Field::Author), "Maria Lopez, James Chen");
    assert_eq!(surface.text(Field::PublicationDate), "2024-04-18 14:30:00+02:00");
    assert!(surface.text(Field::Sentiment).starts_with("Polarity: 0."));
    assert!(surface.text(Field::Sentiment).ends_with("Sentiment: Positive"));
    for (field, text) in surface.fields() {
        assert!(!text.is_empty(), "{} is empty", field);
        assert!(!text.contains("Error:"), "{} shows an error", field);
        assert!(surface.is_locked(field));
    }
}

#[tokio::test]
async fn test_bare_page_uses_placeholders() {
    let outcome = fixture_pipeline("bare.html").run("https://example.com/mill").await;

    let mut surface = OutputSurface::new();
    render(&outcome, &mut surface).unwrap();

    assert_eq!(surface.text(Field::Title), "No Title Found");
    assert_eq!(surface.text(Field::Author), "No Author Found");
    assert_eq!(surface.text(Field::PublicationDate), "No Date Available");
    assert!(surface.text(Field::Summary).starts_with("Residents gathered at the old mill"));
}

#[tokio::test]
async fn test_neutral_article() {
    let report = fixture_pipeline("neutral.html").run("news.example.org/council").await.unwrap();

    assert_eq!(report.article.title.as_deref(), Some("Council Schedules Budget Hearing"));
    assert_eq!(report.article.authors, vec!["Priya Natarajan".to_string()]);
    assert_eq!(report.sentiment, Sentiment::neutral());

    let mut surface = OutputSurface::new();
    render(&Ok(report), &mut surface).unwrap();

    assert_eq!(surface.text(Field::PublicationDate), "2024-02-05 00:00:00+00:00");
    assert_eq!(surface.text(Field::Sentiment), "Polarity: 0.0, Sentiment: Neutral");
}

#[tokio::test]
async fn test_blank_input_after_success_keeps_stale_fields() {
    let pipeline = fixture_pipeline("article.html");
    let mut surface = OutputSurface::new();

    render(&pipeline.run("example.com/article").await, &mut surface).unwrap();
    let author = surface.text(Field::Author).to_string();
    let summary = surface.text(Field::Summary).to_string();

    render(&pipeline.run("   ").await, &mut surface).unwrap();

    assert_eq!(surface.text(Field::Title), "Error: Please enter a valid URL");
    assert_eq!(surface.text(Field::Author), author);
    assert_eq!(surface.text(Field::Summary), summary);
}

#[tokio::test]
async fn test_empty_download() {
    let pipeline = Pipeline::new(StaticSource::default());
    let outcome = pipeline.run("example.com").await;

    let mut surface = OutputSurface::new();
    render(&outcome, &mut surface).unwrap();

    assert_eq!(surface.text(Field::Title), "Error: Failed to download the article");
}

#[tokio::test]
async fn test_file_source_pipeline() {
    let path = format!("{}/tests/fixtures/neutral.html", env!("CARGO_MANIFEST_DIR"));
    let pipeline = Pipeline::new(FileSource::new(path));

    let report = pipeline.run("example.com").await.unwrap();
    assert_eq!(report.article.title.as_deref(), Some("Council Schedules Budget Hearing"));
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let pipeline = Pipeline::new(FileSource::new("/nonexistent/summarify/page.html"));
    let outcome = pipeline.run("example.com").await;

    let mut surface = OutputSurface::new();
    render(&outcome, &mut surface).unwrap();
    assert!(surface.text(Field::Title).starts_with("Error: File not found"));
}

#[tokio::test]
async fn test_config_builder_applies() {
    let config = SummarifyConfig::builder().max_sentences(2).max_keywords(3).build();
    let pipeline = Pipeline::with_config(StaticSource::new(fixture("article.html")), config);

    let report = pipeline.run("example.com/article").await.unwrap();
    assert_eq!(report.article.summary.unwrap().lines().count(), 2);
    assert_eq!(report.article.keywords.len(), 3);
}

#[tokio::test]
async fn test_json_output() {
    let outcome = fixture_pipeline("article.html").run("example.com/article").await;
    let json = report_to_json(&outcome, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["ok"], true);
    assert_eq!(value["report"]["article"]["publish_date"], "2024-04-18 14:30:00+02:00");
    assert_eq!(value["report"]["sentiment"]["label"], "Positive");
    assert_eq!(value["fields"][1]["text"], "Maria Lopez, James Chen");
}

#[test]
fn test_normalize_url_api() {
    assert_eq!(normalize_url("  example.com/article "), Some("https://example.com/article".to_string()));
    assert_eq!(normalize_url("http://example.com"), Some("http://example.com".to_string()));
    assert_eq!(normalize_url(" \t "), None);
}

#[test]
fn test_document_and_metadata_api() {
    let doc = Document::parse_with_url(&fixture("article.html"), "https://example.com/article");
    let metadata = doc.extract_metadata();

    assert_eq!(metadata.description.as_deref(), Some("A neighborhood garden is honored for its work with local schools."));
    assert!(metadata.publish_date.is_some());

    let extracted = extract_text(&doc, &ExtractConfig::default());
    assert_eq!(extracted.paragraph_count, 5);
}
