//! Error types surfaced by the chooser decisions.

use crate::PageId;

/// Failure of a chooser operation.
///
/// Validation variants (`InvalidUrl`, `InvalidEmail`, `EmptyValue`) are shown to the
/// editor as form errors. `Route` wraps a failure of the route resolver collaborator
/// and is fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Enter a valid URL.")]
    InvalidUrl { input: String },

    #[error("Enter a valid email address.")]
    InvalidEmail { input: String },

    #[error("{field} must not be empty")]
    EmptyValue { field: &'static str },

    #[error("invalid page type '{0}': expected app_label.model")]
    InvalidPageType(String),

    #[error("unknown page type '{0}'")]
    UnknownPageType(String),

    #[error("'{0}' is not a page type")]
    NotAPageType(String),

    #[error("page {0} not found")]
    PageNotFound(PageId),

    #[error("invalid page number '{0}'")]
    InvalidPageNumber(String),

    #[error("route lookup failed: {0:#}")]
    Route(#[source] anyhow::Error),
}

impl LinkError {
    /// True for errors that are reported back to the editor as a form error
    /// rather than aborting the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LinkError::InvalidUrl { .. } | LinkError::InvalidEmail { .. } | LinkError::EmptyValue { .. }
        )
    }
}
