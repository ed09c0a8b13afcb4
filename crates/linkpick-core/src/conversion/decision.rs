//! Outcome of resolving a submitted external link.

use crate::PageId;

/// Link text and URL as the editor submitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinkSubmission {
    pub url: String,
    pub link_text: Option<String>,
}

impl ExternalLinkSubmission {
    pub fn new(url: impl Into<String>, link_text: Option<&str>) -> Self {
        Self {
            url: url.into(),
            link_text: link_text.map(String::from),
        }
    }
}

/// External side of a pending conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTarget {
    pub url: String,
    pub title: String,
}

/// Internal side of a pending conversion. `url` is `None` for unroutable pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalTarget {
    pub url: Option<String>,
    pub content_item_id: PageId,
}

/// Exactly one of these is produced per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionDecision {
    /// The URL failed validation; `reason` is the message shown to the editor.
    Rejected { reason: String },
    /// Keep the link as submitted.
    KeptExternal {
        url: String,
        title: String,
        prefer_this_title_as_link_text: bool,
    },
    /// Silently rewritten to a page link.
    Converted {
        url: String,
        content_item_id: PageId,
        title: String,
        prefer_this_title_as_link_text: bool,
    },
    /// The URL matches a page, but not exactly (or the policy says to ask).
    NeedsConfirmation {
        external: ExternalTarget,
        internal: InternalTarget,
    },
}

impl ConversionDecision {
    /// Page id for decisions that refer to an internal page.
    pub fn content_item_id(&self) -> Option<PageId> {
        match self {
            ConversionDecision::Converted {
                content_item_id, ..
            } => Some(*content_item_id),
            ConversionDecision::NeedsConfirmation { internal, .. } => {
                Some(internal.content_item_id)
            }
            ConversionDecision::Rejected { .. } | ConversionDecision::KeptExternal { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConversionDecision::Rejected { .. } => "rejected",
            ConversionDecision::KeptExternal { .. } => "kept_external",
            ConversionDecision::Converted { .. } => "converted",
            ConversionDecision::NeedsConfirmation { .. } => "needs_confirmation",
        }
    }
}
