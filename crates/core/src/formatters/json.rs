use crate::Result;
use crate::pipeline::Report;
use crate::surface::report_fields;
use serde::Serialize;

/// Complete JSON output structure for one request
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Whether the request succeeded
    pub ok: bool,
    /// The full report, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a Report>,
    /// Rendered form fields, present on success
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<JsonField>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One rendered form field
#[derive(Debug, Clone, Serialize)]
pub struct JsonField {
    pub label: &'static str,
    pub text: String,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

impl<'a> JsonOutput<'a> {
    pub fn from_outcome(outcome: &'a Result<Report>) -> Self {
        match outcome {
            Ok(report) => Self {
                ok: true,
                report: Some(report),
                fields: report_fields(report)
                    .into_iter()
                    .map(|(field, text)| JsonField { label: field.label(), text })
                    .collect(),
                error: None,
            },
            Err(e) => Self { ok: false, report: None, fields: Vec::new(), error: Some(e.to_string()) },
        }
    }
}

/// Convert the outcome of one request to JSON
pub fn report_to_json(outcome: &Result<Report>, config: &JsonConfig) -> Result<String> {
    let output = JsonOutput::from_outcome(outcome);

    if config.pretty { Ok(serde_json::to_string_pretty(&output)?) } else { Ok(serde_json::to_string(&output)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, outcome: &Result<Report>) -> Result<String> {
        report_to_json(outcome, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummarifyError;
    use crate::article::Article;
    use crate::metadata::Metadata;
    use crate::sentiment::Sentiment;

    fn sample_report() -> Report {
        let metadata = Metadata {
            title: Some("Test Title".to_string()),
            authors: vec!["Test Author".to_string()],
            ..Default::default()
        };
        let article = Article::from_parts("https://example.com/a", metadata, "Some text here.".to_string());
        Report { url: "https://example.com/a".to_string(), article, sentiment: Sentiment::neutral() }
    }

    #[test]
    fn test_report_to_json_success() {
        let outcome = Ok(sample_report());
        let json = report_to_json(&outcome, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(value["report"]["url"], "https://example.com/a");
        assert_eq!(value["report"]["article"]["title"], "Test Title");
        assert_eq!(value["report"]["sentiment"]["label"], "Neutral");
        assert_eq!(value["report"]["sentiment"]["polarity"], 0.0);
        assert_eq!(value["fields"][0]["label"], "Title");
        assert_eq!(value["fields"][1]["text"], "Test Author");
        assert_eq!(value["fields"][2]["text"], "No Date Available");
        assert_eq!(value["fields"][4]["text"], "Polarity: 0.0, Sentiment: Neutral");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_report_to_json_error() {
        let outcome: Result<Report> = Err(SummarifyError::MissingUrl);
        let json = report_to_json(&outcome, &JsonConfig::default()).unwrap();

        assert_eq!(json, r#"{"ok":false,"error":"Please enter a valid URL"}"#);
    }

    #[test]
    fn test_json_pretty() {
        let outcome: Result<Report> = Err(SummarifyError::DownloadFailed);
        let json = report_to_json(&outcome, &JsonConfig { pretty: true }).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains(r#""error": "Failed to download the article""#));
    }

    #[test]
    fn test_json_formatter() {
        let outcome = Ok(sample_report());
        let config = JsonConfig::default();
        let formatter = JsonFormatter::new(config.clone());

        assert_eq!(formatter.format(&outcome).unwrap(), report_to_json(&outcome, &config).unwrap());
    }
}
