//! `tel:` links.

use super::LinkResult;
use crate::error::LinkError;
use crate::link_text::PriorSelection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneLinkSubmission {
    pub phone_number: String,
    pub link_text: Option<String>,
}

/// Builds `tel:<number>` with all whitespace removed from the number. The
/// default title keeps the number as typed.
pub fn build_phone_link(
    submission: &PhoneLinkSubmission,
    prior: &PriorSelection,
) -> Result<LinkResult, LinkError> {
    let typed = submission.phone_number.trim();
    if typed.is_empty() {
        return Err(LinkError::EmptyValue {
            field: "phone number",
        });
    }
    let compact: String = typed.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(LinkResult::new(
        format!("tel:{compact}"),
        typed,
        submission.link_text.as_deref(),
        prior,
    ))
}
