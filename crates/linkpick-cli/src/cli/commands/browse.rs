//! `linkpick browse [PARENT]` – one page of a browse listing.

use anyhow::Result;
use linkpick_core::browse::{best_root, list_children};
use linkpick_core::choose::{ChooseIntent, ChooseRequest};
use linkpick_core::config::LinkpickConfig;
use linkpick_core::protocol::browse_response;
use linkpick_core::sitemap::SiteMap;
use linkpick_core::tree::PageTree;

use super::{actor, print_json};
use crate::cli::ChooserArgs;

pub fn run_browse(
    cfg: &LinkpickConfig,
    site: &SiteMap,
    parent: Option<u64>,
    page: Option<&str>,
    args: &ChooserArgs,
) -> Result<()> {
    let filter = site
        .registry()
        .parse_filter(args.page_type.as_deref().unwrap_or(""))?;
    let actor = actor(site, args.actor.as_deref())?;
    let parent = parent.unwrap_or_else(|| best_root(site, &filter));
    let req = ChooseRequest {
        allowed: &filter,
        intent: ChooseIntent::Select,
        targets: &[],
        can_choose_root: args.can_choose_root,
    };

    let listing = list_children(site, parent, &actor, &req, page, cfg.chooser.per_page)?;
    print_json(&browse_response(&listing))
}
