//! Automatic choice of the page the chooser opens at.

use crate::page_type::PageTypeFilter;
use crate::tree::PageTree;
use crate::PageId;

/// Page to start browsing from for `filter`.
///
/// Without a type restriction this is the tree root. Otherwise it is the deepest
/// page that is a strict ancestor of every page of the desired kinds, so e.g. an
/// event picker opens at the single events index. No matching pages: tree root.
pub fn best_root(tree: &dyn PageTree, filter: &PageTypeFilter) -> PageId {
    if filter.is_base() {
        return tree.root();
    }
    let registry = tree.registry();

    let mut common: Option<Vec<PageId>> = None;
    for id in tree.page_ids() {
        let Some(page) = tree.page(id) else { continue };
        if !filter.admits(registry, &page.kind) {
            continue;
        }
        let ancestors = tree.ancestors(id);
        common = Some(match common {
            None => ancestors,
            Some(prev) => prev
                .into_iter()
                .zip(ancestors)
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a)
                .collect(),
        });
    }

    common
        .and_then(|path| path.last().copied())
        .unwrap_or_else(|| tree.root())
}
