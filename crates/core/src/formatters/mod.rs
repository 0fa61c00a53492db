pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, JsonOutput, report_to_json};
pub use text::{TextConfig, TextFormatter, surface_to_text};
