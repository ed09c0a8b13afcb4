//! `linkpick email <address>` – mailto: link.

use anyhow::Result;
use linkpick_core::links::{build_email_link, EmailLinkSubmission};
use linkpick_core::protocol::LinkKind;
use linkpick_core::PriorSelection;

use super::print_link;

pub fn run_email(submission: &EmailLinkSubmission, prior: &PriorSelection) -> Result<()> {
    print_link(LinkKind::Email, build_email_link(submission, prior))
}
