//! Read-only view of the page tree used by choosability and browsing.

use serde::{Deserialize, Serialize};

use crate::page_type::PageTypeRegistry;
use crate::PageId;

/// A page as the chooser sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub id: PageId,
    #[serde(default)]
    pub parent: Option<PageId>,
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
}

/// Tree queries. Implementations own storage; this crate only reads.
pub trait PageTree {
    /// Id of the tree root (the page with no parent).
    fn root(&self) -> PageId;

    fn page(&self, id: PageId) -> Option<&PageNode>;

    /// Children of `id` in display order.
    fn children(&self, id: PageId) -> Vec<PageId>;

    /// Every page id, in display order.
    fn page_ids(&self) -> Vec<PageId>;

    fn registry(&self) -> &PageTypeRegistry;

    fn is_root(&self, id: PageId) -> bool {
        id == self.root()
    }

    fn has_children(&self, id: PageId) -> bool {
        !self.children(id).is_empty()
    }

    /// Ancestors of `id`, root first, excluding `id` itself.
    fn ancestors(&self, id: PageId) -> Vec<PageId> {
        let mut out = Vec::new();
        let mut current = self.page(id).and_then(|p| p.parent);
        while let Some(pid) = current {
            if out.contains(&pid) {
                break;
            }
            out.push(pid);
            current = self.page(pid).and_then(|p| p.parent);
        }
        out.reverse();
        out
    }

    /// True if `id` is strictly below `ancestor`.
    fn is_descendant_of(&self, id: PageId, ancestor: PageId) -> bool {
        self.ancestors(id).contains(&ancestor)
    }
}
