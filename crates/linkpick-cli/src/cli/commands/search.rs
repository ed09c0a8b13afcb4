//! `linkpick search <query>` – title search over the site map.

use anyhow::Result;
use linkpick_core::browse::search;
use linkpick_core::choose::{ChooseIntent, ChooseRequest};
use linkpick_core::config::LinkpickConfig;
use linkpick_core::protocol::search_response;
use linkpick_core::sitemap::SiteMap;
use linkpick_core::tree::PageTree;

use super::{actor, print_json};
use crate::cli::ChooserArgs;

pub fn run_search(
    cfg: &LinkpickConfig,
    site: &SiteMap,
    query: &str,
    page: Option<&str>,
    args: &ChooserArgs,
) -> Result<()> {
    let filter = site
        .registry()
        .parse_filter(args.page_type.as_deref().unwrap_or(""))?;
    let actor = actor(site, args.actor.as_deref())?;
    let req = ChooseRequest {
        allowed: &filter,
        intent: ChooseIntent::Select,
        targets: &[],
        can_choose_root: args.can_choose_root,
    };

    let results = search(site, query, &actor, &req, page, cfg.chooser.per_page)?;
    print_json(&search_response(&results))
}
