//! `mailto:` links with optional subject and body.

use super::LinkResult;
use crate::error::LinkError;
use crate::link_text::PriorSelection;
use crate::url_model::percent_encode_component;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailLinkSubmission {
    pub email_address: String,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub link_text: Option<String>,
}

/// Builds `mailto:<address>[?subject=..][&body=..]`.
///
/// Only supplied (non-empty) parameters are appended, subject first.
pub fn build_email_link(
    submission: &EmailLinkSubmission,
    prior: &PriorSelection,
) -> Result<LinkResult, LinkError> {
    let address = submission.email_address.trim();
    if !looks_like_email(address) {
        return Err(LinkError::InvalidEmail {
            input: submission.email_address.clone(),
        });
    }

    let params: Vec<String> = [
        ("subject", submission.subject.as_deref()),
        ("body", submission.body.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, value)| match value {
        Some(v) if !v.is_empty() => Some(format!("{name}={}", percent_encode_component(v))),
        _ => None,
    })
    .collect();

    let mut url = format!("mailto:{address}");
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    Ok(LinkResult::new(
        url,
        address,
        submission.link_text.as_deref(),
        prior,
    ))
}

/// One `@`, non-empty local part, a domain, no whitespace.
fn looks_like_email(address: &str) -> bool {
    if address.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
