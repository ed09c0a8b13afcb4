//! `#fragment` links within the current page.

use super::LinkResult;
use crate::error::LinkError;
use crate::link_text::PriorSelection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorLinkSubmission {
    pub anchor: String,
    pub link_text: Option<String>,
}

/// Builds `#<anchor>`. The anchor is used as typed; only emptiness is checked.
pub fn build_anchor_link(
    submission: &AnchorLinkSubmission,
    prior: &PriorSelection,
) -> Result<LinkResult, LinkError> {
    let anchor = submission.anchor.trim();
    if anchor.is_empty() {
        return Err(LinkError::EmptyValue { field: "anchor" });
    }
    Ok(LinkResult::new(
        format!("#{anchor}"),
        anchor,
        submission.link_text.as_deref(),
        prior,
    ))
}
