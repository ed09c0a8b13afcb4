//! `linkpick can-choose <id>` – permission and type check for one page.

use anyhow::Result;
use linkpick_core::choose::{can_choose, ChooseIntent, ChooseRequest};
use linkpick_core::sitemap::SiteMap;
use linkpick_core::tree::PageTree;
use serde_json::json;

use super::{actor, print_json};
use crate::cli::ChooserArgs;

pub fn run_can_choose(
    site: &SiteMap,
    id: u64,
    intent: ChooseIntent,
    targets: &[u64],
    args: &ChooserArgs,
) -> Result<()> {
    let filter = site
        .registry()
        .parse_filter(args.page_type.as_deref().unwrap_or(""))?;
    let actor = actor(site, args.actor.as_deref())?;
    let req = ChooseRequest {
        allowed: &filter,
        intent,
        targets,
        can_choose_root: args.can_choose_root,
    };

    let allowed = can_choose(site, id, &actor, &req);
    print_json(&json!({
        "id": id,
        "intent": intent.as_str(),
        "can_choose": allowed,
    }))
}
