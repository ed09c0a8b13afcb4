//! `linkpick root` – the page the chooser opens at for a page type filter.

use anyhow::Result;
use linkpick_core::browse::best_root;
use linkpick_core::sitemap::SiteMap;
use linkpick_core::tree::PageTree;
use linkpick_core::LinkError;
use serde_json::json;

use super::print_json;

pub fn run_best_root(site: &SiteMap, page_type: Option<&str>) -> Result<()> {
    let filter = site.registry().parse_filter(page_type.unwrap_or(""))?;
    let id = best_root(site, &filter);
    let page = site.page(id).ok_or(LinkError::PageNotFound(id))?;
    print_json(&json!({
        "step": "root",
        "id": id,
        "title": page.title,
        "page_type_string": filter.raw,
        "page_type_names": filter.names,
    }))
}
