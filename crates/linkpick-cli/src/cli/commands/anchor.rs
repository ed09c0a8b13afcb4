//! `linkpick anchor <name>` – link to an anchor on the current page.

use anyhow::Result;
use linkpick_core::links::{build_anchor_link, AnchorLinkSubmission};
use linkpick_core::protocol::LinkKind;
use linkpick_core::PriorSelection;

use super::print_link;

pub fn run_anchor(submission: &AnchorLinkSubmission, prior: &PriorSelection) -> Result<()> {
    print_link(LinkKind::Anchor, build_anchor_link(submission, prior))
}
