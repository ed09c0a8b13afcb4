//! URL modeling for the external link chooser.
//!
//! Validates submitted URLs (absolute http/https or root-relative paths) and splits
//! off the query string and fragment so the remaining path can be routed.

mod encode;
mod strip;

pub use encode::percent_encode_component;
pub use strip::strip_query_and_fragment;

use crate::error::LinkError;

/// Schemes accepted for absolute URLs.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// A submitted URL that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    /// The URL as submitted (trimmed), including any query string or fragment.
    pub original: String,
    /// Host for absolute URLs; `None` for root-relative paths.
    pub host: Option<String>,
    /// Path with query string and fragment removed.
    pub path: String,
    /// True if a query string or fragment was removed to obtain `path`.
    pub stripped: bool,
}

impl ValidatedUrl {
    pub fn is_relative(&self) -> bool {
        self.host.is_none()
    }
}

/// Validates a submitted URL and extracts its routable path.
///
/// Accepts `http`/`https` URLs with a host and paths starting with a single `/`.
/// Anything else (other schemes, bare host names, `//host` references, embedded
/// whitespace) is rejected with [`LinkError::InvalidUrl`].
pub fn validate_url(input: &str) -> Result<ValidatedUrl, LinkError> {
    let trimmed = input.trim();
    let invalid = || LinkError::InvalidUrl {
        input: input.to_string(),
    };

    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (bare, stripped) = strip_query_and_fragment(trimmed);

    if trimmed.starts_with('/') {
        if trimmed.starts_with("//") {
            return Err(invalid());
        }
        // Parse against a throwaway base purely to reject malformed paths.
        let base = url::Url::parse("http://relative.invalid/").map_err(|_| invalid())?;
        base.join(trimmed).map_err(|_| invalid())?;
        return Ok(ValidatedUrl {
            original: trimmed.to_string(),
            host: None,
            path: bare.to_string(),
            stripped,
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|_| invalid())?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(invalid());
    }
    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => return Err(invalid()),
    };

    let path = match parsed.path() {
        "" => "/".to_string(),
        p => p.to_string(),
    };

    Ok(ValidatedUrl {
        original: trimmed.to_string(),
        host: Some(host),
        path,
        stripped,
    })
}
