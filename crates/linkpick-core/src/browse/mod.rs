//! Browsing the page tree in the chooser: where to start, what to list, how
//! to page through long listings, and searching by title.

mod paginate;
mod root;
mod search;

pub use paginate::{paginate, Pagination, DEFAULT_PER_PAGE};
pub use root::best_root;
pub use search::{search, SearchHit, SearchResults};

use serde::Serialize;

use crate::choose::{can_choose, Authorizer, ChooseRequest};
use crate::error::LinkError;
use crate::tree::PageTree;
use crate::PageId;

/// One row of a browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseEntry {
    pub id: PageId,
    pub title: String,
    pub kind: String,
    pub can_choose: bool,
    pub can_descend: bool,
}

/// A browse listing: the parent page and one page of its children.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseListing {
    pub parent: BrowseEntry,
    pub children: Vec<BrowseEntry>,
    pub pagination: Pagination,
    /// The `page_type` filter, carried across navigation.
    pub page_type_string: String,
    pub page_type_names: Vec<String>,
}

/// Lists the children of `parent` that are either choosable kinds or lead to
/// more pages, paginated with `per_page` entries.
///
/// `page_number` is the raw `p` parameter.
pub fn list_children(
    tree: &dyn PageTree,
    parent: PageId,
    actor: &dyn Authorizer,
    req: &ChooseRequest<'_>,
    page_number: Option<&str>,
    per_page: usize,
) -> Result<BrowseListing, LinkError> {
    let registry = tree.registry();
    let entry = |id: PageId| -> Option<BrowseEntry> {
        let page = tree.page(id)?;
        Some(BrowseEntry {
            id,
            title: page.title.clone(),
            kind: page.kind.clone(),
            can_choose: can_choose(tree, id, actor, req),
            can_descend: tree.has_children(id),
        })
    };

    let parent_entry = entry(parent).ok_or(LinkError::PageNotFound(parent))?;

    let visible: Vec<PageId> = tree
        .children(parent)
        .into_iter()
        .filter(|&id| {
            tree.page(id)
                .map(|p| req.allowed.admits(registry, &p.kind) || tree.has_children(id))
                .unwrap_or(false)
        })
        .collect();

    let pagination = paginate(visible.len(), page_number, per_page)?;
    let children = visible[pagination.range()]
        .iter()
        .filter_map(|&id| entry(id))
        .collect();

    tracing::debug!(
        parent,
        page = pagination.number,
        pages = pagination.num_pages,
        "browse listing built"
    );

    Ok(BrowseListing {
        parent: parent_entry,
        children,
        pagination,
        page_type_string: req.allowed.raw.clone(),
        page_type_names: req.allowed.names.clone(),
    })
}
