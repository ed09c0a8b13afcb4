//! Route resolver interface: maps paths to pages and pages back to URLs.
//!
//! The conversion logic only depends on this trait and does not know how pages
//! are stored or served. [`crate::sitemap::SiteMap`] is the in-memory implementation.

use crate::PageId;

/// Result of routing a path: the owning page and its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMatch {
    pub content_item_id: Option<PageId>,
    /// `None` when the page exists but cannot currently be served.
    pub resolved_url: Option<String>,
}

/// Collaborator that knows which page owns a path.
///
/// Lookup failures are returned as errors and are fatal for the request.
pub trait RouteResolver {
    /// Page owning `path` (a bare path with the serving prefix already removed).
    fn resolve_path(&self, path: &str) -> anyhow::Result<Option<PageId>>;

    /// Canonical URL of `id`, or `None` if the page is not routable.
    fn reverse_url(&self, id: PageId) -> anyhow::Result<Option<String>>;

    /// Resolves `path` and, on a hit, its canonical URL.
    fn route(&self, path: &str) -> anyhow::Result<RouteMatch> {
        let Some(id) = self.resolve_path(path)? else {
            return Ok(RouteMatch::default());
        };
        Ok(RouteMatch {
            content_item_id: Some(id),
            resolved_url: self.reverse_url(id)?,
        })
    }
}

impl<R: RouteResolver + ?Sized> RouteResolver for &R {
    fn resolve_path(&self, path: &str) -> anyhow::Result<Option<PageId>> {
        (**self).resolve_path(path)
    }

    fn reverse_url(&self, id: PageId) -> anyhow::Result<Option<String>> {
        (**self).reverse_url(id)
    }
}
