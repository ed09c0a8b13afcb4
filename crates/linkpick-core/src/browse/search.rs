//! Title search over the whole tree, limited to the kinds the filter admits.

use serde::Serialize;

use super::paginate::{paginate, Pagination};
use crate::choose::{can_choose, Authorizer, ChooseRequest};
use crate::error::LinkError;
use crate::tree::PageTree;
use crate::PageId;

/// One search hit, with its parent so the caller can navigate there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: PageId,
    pub title: String,
    pub kind: String,
    /// Display name of the page's kind.
    pub kind_name: String,
    pub parent: Option<PageId>,
    pub parent_title: Option<String>,
    pub can_choose: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub pagination: Pagination,
    pub page_type_string: String,
    pub page_type_names: Vec<String>,
}

/// Pages whose title contains every word of `query` (case-insensitive).
///
/// The tree root is never a hit. A blank query matches nothing.
pub fn search(
    tree: &dyn PageTree,
    query: &str,
    actor: &dyn Authorizer,
    req: &ChooseRequest<'_>,
    page_number: Option<&str>,
    per_page: usize,
) -> Result<SearchResults, LinkError> {
    let registry = tree.registry();
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    let matched: Vec<PageId> = if terms.is_empty() {
        Vec::new()
    } else {
        tree.page_ids()
            .into_iter()
            .filter(|&id| !tree.is_root(id))
            .filter(|&id| {
                tree.page(id).is_some_and(|p| {
                    req.allowed.admits(registry, &p.kind) && title_matches(&p.title, &terms)
                })
            })
            .collect()
    };

    let pagination = paginate(matched.len(), page_number, per_page)?;
    let hits = matched[pagination.range()]
        .iter()
        .filter_map(|&id| {
            let page = tree.page(id)?;
            let parent = page.parent.and_then(|pid| tree.page(pid));
            Some(SearchHit {
                id,
                title: page.title.clone(),
                kind: page.kind.clone(),
                kind_name: registry
                    .get(&page.kind)
                    .map(|k| k.verbose_name.clone())
                    .unwrap_or_else(|| page.kind.clone()),
                parent: page.parent,
                parent_title: parent.map(|p| p.title.clone()),
                can_choose: can_choose(tree, id, actor, req),
            })
        })
        .collect();

    tracing::debug!(query, total = pagination.total, "page search");

    Ok(SearchResults {
        query: query.trim().to_string(),
        hits,
        pagination,
        page_type_string: req.allowed.raw.clone(),
        page_type_names: req.allowed.names.clone(),
    })
}

fn title_matches(title: &str, terms: &[String]) -> bool {
    let title = title.to_lowercase();
    terms.iter().all(|t| title.contains(t.as_str()))
}
