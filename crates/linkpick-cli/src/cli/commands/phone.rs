//! `linkpick phone <number>` – tel: link.

use anyhow::Result;
use linkpick_core::links::{build_phone_link, PhoneLinkSubmission};
use linkpick_core::protocol::LinkKind;
use linkpick_core::PriorSelection;

use super::print_link;

pub fn run_phone(submission: &PhoneLinkSubmission, prior: &PriorSelection) -> Result<()> {
    print_link(LinkKind::Phone, build_phone_link(submission, prior))
}
