//! Page kinds and the `page_type` filter accepted by the chooser.
//!
//! Kinds are named `app_label.model`, compared case-insensitively. A kind may
//! extend another kind (so a filter on the base also admits it) and may restrict
//! which kinds of page it can be created under.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::LinkError;

/// Kind every page is an instance of.
pub const BASE_PAGE_TYPE: &str = "wagtailcore.page";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageKind {
    pub name: String,
    #[serde(default)]
    pub verbose_name: String,
    /// Kind this one extends; `None` means it extends the base page kind.
    #[serde(default)]
    pub extends: Option<String>,
    /// Kinds this one may be placed under; `None` allows any parent.
    #[serde(default)]
    pub parent_page_types: Option<Vec<String>>,
    /// False for registered models that are not pages (e.g. sites).
    #[serde(default = "default_true")]
    pub is_page: bool,
}

fn default_true() -> bool {
    true
}

impl PageKind {
    pub fn new(name: &str, verbose_name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            verbose_name: verbose_name.to_string(),
            extends: None,
            parent_page_types: None,
            is_page: true,
        }
    }

    pub fn extends(mut self, base: &str) -> Self {
        self.extends = Some(base.to_ascii_lowercase());
        self
    }

    pub fn parent_page_types(mut self, parents: &[&str]) -> Self {
        self.parent_page_types = Some(parents.iter().map(|p| p.to_ascii_lowercase()).collect());
        self
    }

    pub fn not_a_page(mut self) -> Self {
        self.is_page = false;
        self
    }
}

/// Known kinds, always including [`BASE_PAGE_TYPE`].
#[derive(Debug, Clone)]
pub struct PageTypeRegistry {
    kinds: BTreeMap<String, PageKind>,
}

impl Default for PageTypeRegistry {
    fn default() -> Self {
        let mut kinds = BTreeMap::new();
        kinds.insert(BASE_PAGE_TYPE.to_string(), PageKind::new(BASE_PAGE_TYPE, "Page"));
        Self { kinds }
    }
}

impl PageTypeRegistry {
    pub fn new<I: IntoIterator<Item = PageKind>>(kinds: I) -> Self {
        let mut reg = Self::default();
        for kind in kinds {
            reg.register(kind);
        }
        reg
    }

    pub fn register(&mut self, mut kind: PageKind) {
        kind.name = kind.name.to_ascii_lowercase();
        kind.extends = kind.extends.map(|e| e.to_ascii_lowercase());
        if let Some(parents) = kind.parent_page_types.as_mut() {
            parents.iter_mut().for_each(|p| *p = p.to_ascii_lowercase());
        }
        if kind.verbose_name.is_empty() {
            kind.verbose_name = kind.name.clone();
        }
        self.kinds.insert(kind.name.clone(), kind);
    }

    pub fn get(&self, name: &str) -> Option<&PageKind> {
        self.kinds.get(&name.to_ascii_lowercase())
    }

    /// True if `kind` is `ancestor` or extends it (transitively).
    pub fn is_subtype(&self, kind: &str, ancestor: &str) -> bool {
        let ancestor = ancestor.to_ascii_lowercase();
        if ancestor == BASE_PAGE_TYPE {
            return true;
        }
        let mut current = Some(kind.to_ascii_lowercase());
        // Bounded by the registry size so a cyclic `extends` cannot loop forever.
        for _ in 0..=self.kinds.len() {
            let next = match current.as_deref() {
                Some(name) if name == ancestor => return true,
                Some(name) => self.kinds.get(name).and_then(|k| k.extends.clone()),
                None => return false,
            };
            current = next;
        }
        false
    }

    /// True if a page of `child` kind may be placed under a page of `parent` kind.
    pub fn can_exist_under(&self, child: &str, parent: &str) -> bool {
        match self.get(child).and_then(|k| k.parent_page_types.as_ref()) {
            None => true,
            Some(allowed) => allowed.iter().any(|a| self.is_subtype(parent, a)),
        }
    }

    /// Parses a comma-separated `page_type` filter. Blank means every page.
    pub fn parse_filter(&self, raw: &str) -> Result<PageTypeFilter, LinkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(PageTypeFilter::base(self));
        }

        let mut kinds = Vec::new();
        let mut names = Vec::new();
        for part in trimmed.split(',') {
            let name = part.trim().to_ascii_lowercase();
            let mut pieces = name.split('.');
            let well_formed = matches!(
                (pieces.next(), pieces.next(), pieces.next()),
                (Some(app), Some(model), None) if !app.is_empty() && !model.is_empty()
            );
            if !well_formed {
                return Err(LinkError::InvalidPageType(part.trim().to_string()));
            }
            let kind = self
                .kinds
                .get(&name)
                .ok_or_else(|| LinkError::UnknownPageType(part.trim().to_string()))?;
            if !kind.is_page {
                return Err(LinkError::NotAPageType(part.trim().to_string()));
            }
            names.push(kind.verbose_name.clone());
            kinds.push(name);
        }

        Ok(PageTypeFilter {
            raw: trimmed.to_string(),
            kinds,
            names,
        })
    }
}

/// Parsed `page_type` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTypeFilter {
    /// Filter string as given, used to carry the filter across navigation.
    pub raw: String,
    /// Lowercased kind names.
    pub kinds: Vec<String>,
    /// Display names, in filter order.
    pub names: Vec<String>,
}

impl PageTypeFilter {
    /// Filter admitting every page.
    pub fn base(registry: &PageTypeRegistry) -> Self {
        let names = registry
            .get(BASE_PAGE_TYPE)
            .map(|k| vec![k.verbose_name.clone()])
            .unwrap_or_default();
        Self {
            raw: String::new(),
            kinds: vec![BASE_PAGE_TYPE.to_string()],
            names,
        }
    }

    pub fn is_base(&self) -> bool {
        self.kinds.iter().any(|k| k == BASE_PAGE_TYPE)
    }

    /// True if a page of `kind` satisfies the filter.
    pub fn admits(&self, registry: &PageTypeRegistry, kind: &str) -> bool {
        self.kinds.iter().any(|k| registry.is_subtype(kind, k))
    }
}
