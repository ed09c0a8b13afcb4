//! Builders for non-page links: anchors, email addresses and phone numbers.
//!
//! These are pure formatting functions; none of them consult the route resolver.
//! All apply the same link-text preference as external links.

mod anchor;
mod email;
mod phone;

pub use anchor::{build_anchor_link, AnchorLinkSubmission};
pub use email::{build_email_link, EmailLinkSubmission};
pub use phone::{build_phone_link, PhoneLinkSubmission};

use crate::link_text::{choose_title, prefer_new_title, PriorSelection};

/// A chosen link ready to be inserted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkResult {
    pub url: String,
    pub title: String,
    pub prefer_this_title_as_link_text: bool,
}

impl LinkResult {
    fn new(
        url: String,
        default_title: &str,
        link_text: Option<&str>,
        prior: &PriorSelection,
    ) -> Self {
        Self {
            url,
            title: choose_title(link_text, default_title),
            prefer_this_title_as_link_text: prefer_new_title(prior, link_text),
        }
    }
}
