//! Error types for Summarify operations.
//!
//! This module defines the main error type [`SummarifyError`] which represents
//! every way a summarize request can fail: missing input, fetching, parsing,
//! and writes to the output surface.
//!
//! The `Display` text of each variant is what the form shows after the
//! `"Error: "` prefix, so messages are written for end users.
//!
//! # Example
//!
//! ```rust
//! use summarify_core::{SummarifyError, Result};
//!
//! fn require_body(html: &str) -> Result<&str> {
//!     if html.trim().is_empty() {
//!         return Err(SummarifyError::DownloadFailed);
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::surface::Field;

/// Main error type for summarize requests.
#[derive(Error, Debug)]
pub enum SummarifyError {
    /// The URL input was empty or whitespace only.
    #[error("Please enter a valid URL")]
    MissingUrl,

    /// The download step produced no content.
    #[error("Failed to download the article")]
    DownloadFailed,

    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Article download failed with status {status} for url {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// The normalizer only repairs the scheme, so anything else that
    /// `url::Url` rejects ends up here.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found (offline mode).
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading local sources.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A write was attempted on an output slot that is locked.
    #[error("Output field {0} is read-only")]
    SlotLocked(Field),

    /// JSON serialization errors.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for SummarifyError.
pub type Result<T> = std::result::Result<T, SummarifyError>;
