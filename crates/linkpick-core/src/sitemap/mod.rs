//! In-memory site map: a page tree described in TOML.
//!
//! Implements [`RouteResolver`] and [`PageTree`] so the chooser decisions can be
//! exercised without a real content store. Layout of the file:
//!
//! ```toml
//! [site]
//! root_page = 2          # page serving "/"
//! hostname = "localhost" # absolute URLs on other hosts are external
//! serving_prefix = ""    # e.g. "site" or "en/site"
//! routable = true        # false: pages have no URL
//!
//! [[kinds]]
//! name = "tests.eventpage"
//! verbose_name = "Event page"
//! parent_page_types = ["tests.eventindex"]
//!
//! [[pages]]
//! id = 1
//! kind = "wagtailcore.page"
//! title = "Root"
//! ```

mod load;

use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::choose::Actor;
use crate::conversion::DEFAULT_SITE_HOST;
use crate::page_type::{PageKind, PageTypeRegistry};
use crate::resolver::RouteResolver;
use crate::tree::{PageNode, PageTree};
use crate::PageId;

/// `[site]` section of a site map file.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    /// Page serving the site's root URL; defaults to the tree root.
    #[serde(default)]
    pub root_page: Option<PageId>,
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default)]
    pub serving_prefix: String,
    #[serde(default = "default_routable")]
    pub routable: bool,
}

fn default_hostname() -> String {
    DEFAULT_SITE_HOST.to_string()
}

fn default_routable() -> bool {
    true
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            root_page: None,
            hostname: default_hostname(),
            serving_prefix: String::new(),
            routable: true,
        }
    }
}

/// Raw file contents before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteMapFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub kinds: Vec<PageKind>,
    #[serde(default)]
    pub pages: Vec<PageNode>,
    #[serde(default)]
    pub actors: Vec<Actor>,
}

#[derive(Debug, Clone)]
pub struct SiteMap {
    registry: PageTypeRegistry,
    pages: BTreeMap<PageId, PageNode>,
    /// Page ids in file order.
    order: Vec<PageId>,
    children: HashMap<PageId, Vec<PageId>>,
    root: PageId,
    site_root: PageId,
    routable: bool,
    hostname: String,
    serving_prefix: String,
    actors: Vec<Actor>,
}

impl SiteMap {
    /// Builds and validates a site map.
    ///
    /// Fails on duplicate ids, unknown parents or kinds, a missing or repeated
    /// tree root, or a `root_page` that does not exist.
    pub fn from_file(file: SiteMapFile) -> Result<Self> {
        let registry = PageTypeRegistry::new(file.kinds);

        let mut pages = BTreeMap::new();
        let mut order = Vec::with_capacity(file.pages.len());
        for mut page in file.pages {
            page.kind = page.kind.to_ascii_lowercase();
            if registry.get(&page.kind).is_none() {
                bail!("page {} has unknown kind '{}'", page.id, page.kind);
            }
            order.push(page.id);
            if pages.insert(page.id, page).is_some() {
                bail!("duplicate page id {}", order[order.len() - 1]);
            }
        }

        let mut root = None;
        let mut children: HashMap<PageId, Vec<PageId>> = HashMap::new();
        for id in &order {
            match pages[id].parent {
                None if root.is_some() => bail!("more than one root page (page {id})"),
                None => root = Some(*id),
                Some(parent) if !pages.contains_key(&parent) => {
                    bail!("page {id} has unknown parent {parent}")
                }
                Some(parent) => children.entry(parent).or_default().push(*id),
            }
        }
        let Some(root) = root else {
            bail!("site map has no root page");
        };

        let site_root = file.site.root_page.unwrap_or(root);
        if !pages.contains_key(&site_root) {
            bail!("site root page {site_root} does not exist");
        }

        let map = Self {
            registry,
            pages,
            order,
            children,
            root,
            site_root,
            routable: file.site.routable,
            hostname: file.site.hostname.trim().to_ascii_lowercase(),
            serving_prefix: file.site.serving_prefix.trim_matches('/').to_string(),
            actors: file.actors,
        };
        if map.order.iter().any(|&id| map.ancestors(id).contains(&id)) {
            bail!("site map contains a parent cycle");
        }
        Ok(map)
    }

    /// Overrides the serving prefix used for generated URLs.
    pub fn with_serving_prefix(mut self, prefix: &str) -> Self {
        self.serving_prefix = prefix.trim_matches('/').to_string();
        self
    }

    /// Marks every page as unroutable (no serving path registered).
    pub fn unroutable(mut self) -> Self {
        self.routable = false;
        self
    }

    pub fn serving_prefix(&self) -> &str {
        &self.serving_prefix
    }

    /// Host name the site is served on.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn site_root(&self) -> PageId {
        self.site_root
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name == name)
    }

    fn child_by_slug(&self, parent: PageId, slug: &str) -> Option<PageId> {
        self.children
            .get(&parent)?
            .iter()
            .copied()
            .find(|id| self.pages[id].slug == slug)
    }
}

impl PageTree for SiteMap {
    fn root(&self) -> PageId {
        self.root
    }

    fn page(&self, id: PageId) -> Option<&PageNode> {
        self.pages.get(&id)
    }

    fn children(&self, id: PageId) -> Vec<PageId> {
        self.children.get(&id).cloned().unwrap_or_default()
    }

    fn page_ids(&self) -> Vec<PageId> {
        self.order.clone()
    }

    fn registry(&self) -> &PageTypeRegistry {
        &self.registry
    }
}

impl RouteResolver for SiteMap {
    fn resolve_path(&self, path: &str) -> Result<Option<PageId>> {
        let mut current = self.site_root;
        for component in path.split('/').filter(|c| !c.is_empty()) {
            match self.child_by_slug(current, component) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    fn reverse_url(&self, id: PageId) -> Result<Option<String>> {
        if !self.routable || !self.pages.contains_key(&id) {
            return Ok(None);
        }
        if id != self.site_root && !self.is_descendant_of(id, self.site_root) {
            return Ok(None);
        }

        let mut url = String::from("/");
        if !self.serving_prefix.is_empty() {
            url.push_str(&self.serving_prefix);
            url.push('/');
        }
        let below_site_root = self
            .ancestors(id)
            .into_iter()
            .chain(std::iter::once(id))
            .skip_while(|&p| p != self.site_root)
            .skip(1);
        for page in below_site_root {
            url.push_str(&self.pages[&page].slug);
            url.push('/');
        }
        Ok(Some(url))
    }
}
