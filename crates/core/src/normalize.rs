//! URL input normalization.
//!
//! The form accepts free text, so the input is repaired before it reaches the
//! fetcher: surrounding whitespace is dropped and a missing scheme becomes
//! `https://`. Nothing else is validated here; a malformed URL fails later,
//! when the download is attempted.

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Normalizes a raw URL string.
///
/// Returns `None` when the input is empty or whitespace only.
///
/// # Example
///
/// ```rust
/// use summarify_core::normalize_url;
///
/// assert_eq!(normalize_url("  example.com/a "), Some("https://example.com/a".to_string()));
/// assert_eq!(normalize_url("http://example.com"), Some("http://example.com".to_string()));
/// assert_eq!(normalize_url("   "), None);
/// ```
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    if has_http_scheme(trimmed) { Some(trimmed.to_string()) } else { Some(format!("{HTTPS_PREFIX}{trimmed}")) }
}

/// Case-sensitive check for an `http://` or `https://` prefix.
fn has_http_scheme(url: &str) -> bool {
    url.starts_with(HTTP_PREFIX) || url.starts_with(HTTPS_PREFIX)
}
