//! JSON step protocol spoken by the chooser modal.
//!
//! Every response names the next `step`: a chosen link is posted back to the
//! calling page, a pending conversion asks the editor, a rejected URL re-shows
//! the form with the error.

use serde_json::{json, Value};

use crate::browse::{BrowseListing, SearchResults};
use crate::conversion::ConversionDecision;
use crate::error::LinkError;
use crate::links::LinkResult;

/// Step name for a chosen external (or converted) link.
pub const STEP_EXTERNAL_LINK_CHOSEN: &str = "external_link_chosen";
/// Step name asking the editor to confirm a conversion.
pub const STEP_CONFIRM_EXTERNAL_TO_INTERNAL: &str = "confirm_external_to_internal";
/// Step name re-showing the external link form.
pub const STEP_EXTERNAL_LINK: &str = "external_link";

/// Kinds of non-page link, each with its own `<kind>_link_chosen` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Anchor,
    Email,
    Phone,
}

impl LinkKind {
    pub fn chosen_step(self) -> &'static str {
        match self {
            LinkKind::Anchor => "anchor_link_chosen",
            LinkKind::Email => "email_link_chosen",
            LinkKind::Phone => "phone_link_chosen",
        }
    }

    /// Step re-showing the form for this kind.
    pub fn form_step(self) -> &'static str {
        match self {
            LinkKind::Anchor => "anchor_link",
            LinkKind::Email => "email_link",
            LinkKind::Phone => "phone_link",
        }
    }
}

/// Serializes a conversion decision into its protocol response.
pub fn decision_response(decision: &ConversionDecision) -> Value {
    match decision {
        ConversionDecision::Rejected { reason } => json!({
            "step": STEP_EXTERNAL_LINK,
            "error": reason,
        }),
        ConversionDecision::KeptExternal {
            url,
            title,
            prefer_this_title_as_link_text,
        } => json!({
            "step": STEP_EXTERNAL_LINK_CHOSEN,
            "result": {
                "url": url,
                "title": title,
                "prefer_this_title_as_link_text": prefer_this_title_as_link_text,
            },
        }),
        ConversionDecision::Converted {
            url,
            content_item_id,
            title,
            prefer_this_title_as_link_text,
        } => json!({
            "step": STEP_EXTERNAL_LINK_CHOSEN,
            "result": {
                "id": content_item_id,
                "url": url,
                "title": title,
                "prefer_this_title_as_link_text": prefer_this_title_as_link_text,
            },
        }),
        ConversionDecision::NeedsConfirmation { external, internal } => json!({
            "step": STEP_CONFIRM_EXTERNAL_TO_INTERNAL,
            "external": {
                "url": external.url,
                "title": external.title,
            },
            "internal": {
                "url": internal.url,
                "id": internal.content_item_id,
            },
        }),
    }
}

/// Serializes a built anchor/email/phone link.
pub fn link_response(kind: LinkKind, result: &LinkResult) -> Value {
    json!({
        "step": kind.chosen_step(),
        "result": result,
    })
}

/// Form error for an anchor/email/phone submission.
pub fn link_error_response(kind: LinkKind, error: &LinkError) -> Value {
    json!({
        "step": kind.form_step(),
        "error": error.to_string(),
    })
}

/// Serializes a browse listing.
pub fn browse_response(listing: &BrowseListing) -> Value {
    json!({
        "step": "browse",
        "listing": listing,
    })
}

/// Serializes search results.
pub fn search_response(results: &SearchResults) -> Value {
    json!({
        "step": "search",
        "results": results,
    })
}
