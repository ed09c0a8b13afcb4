//! Permission-gated choosability: can this page be picked for this purpose?

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::page_type::PageTypeFilter;
use crate::tree::PageTree;
use crate::PageId;

/// What the chosen page will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChooseIntent {
    /// Plain selection (link or page reference field).
    #[default]
    Select,
    /// Destination of a copy.
    CopyTo,
    /// Destination of a single-page move.
    MoveTo,
    /// Destination of a bulk move.
    BulkMoveTo,
}

impl ChooseIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            ChooseIntent::Select => "select",
            ChooseIntent::CopyTo => "copy_to",
            ChooseIntent::MoveTo => "move_to",
            ChooseIntent::BulkMoveTo => "bulk_move_to",
        }
    }

    fn is_move(self) -> bool {
        matches!(self, ChooseIntent::MoveTo | ChooseIntent::BulkMoveTo)
    }
}

impl fmt::Display for ChooseIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChooseIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "select" => Ok(ChooseIntent::Select),
            "copy_to" => Ok(ChooseIntent::CopyTo),
            "move_to" => Ok(ChooseIntent::MoveTo),
            "bulk_move_to" => Ok(ChooseIntent::BulkMoveTo),
            other => Err(format!("unknown intent '{other}'")),
        }
    }
}

/// Authorization collaborator: does the actor hold `intent` on `page`?
pub trait Authorizer {
    fn has_permission(&self, tree: &dyn PageTree, page: PageId, intent: ChooseIntent) -> bool;
}

/// Actor with per-subtree grants.
///
/// A grant on a page covers the page and everything below it. Plain selection
/// needs no grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    #[serde(default)]
    pub superuser: bool,
    #[serde(default)]
    pub grants: Vec<Grant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub page: PageId,
    pub intents: Vec<ChooseIntent>,
}

impl Actor {
    pub fn superuser(name: &str) -> Self {
        Self {
            name: name.to_string(),
            superuser: true,
            grants: Vec::new(),
        }
    }
}

impl Authorizer for Actor {
    fn has_permission(&self, tree: &dyn PageTree, page: PageId, intent: ChooseIntent) -> bool {
        if self.superuser || intent == ChooseIntent::Select {
            return true;
        }
        self.grants.iter().any(|g| {
            g.intents.contains(&intent) && (g.page == page || tree.is_descendant_of(page, g.page))
        })
    }
}

/// Parameters of a choosability check.
#[derive(Debug, Clone)]
pub struct ChooseRequest<'a> {
    pub allowed: &'a PageTypeFilter,
    pub intent: ChooseIntent,
    /// Pages being moved or copied.
    pub targets: &'a [PageId],
    pub can_choose_root: bool,
}

/// Decides whether `candidate` may be chosen.
///
/// Rules in order: root guard, kind filter, move conflicts, then the actor's
/// permission. A single move needs every target to be allowed under the
/// candidate; a bulk move needs at least one.
pub fn can_choose(
    tree: &dyn PageTree,
    candidate: PageId,
    actor: &dyn Authorizer,
    req: &ChooseRequest<'_>,
) -> bool {
    let Some(page) = tree.page(candidate) else {
        return false;
    };
    if tree.is_root(candidate) && !req.can_choose_root {
        return false;
    }
    let registry = tree.registry();
    if !req.allowed.admits(registry, &page.kind) {
        return false;
    }

    if req.intent.is_move() {
        let targets: Vec<_> = req.targets.iter().filter_map(|&t| tree.page(t)).collect();
        if targets
            .iter()
            .any(|t| t.id == candidate || tree.is_descendant_of(candidate, t.id))
        {
            return false;
        }
        let fits = |t: &&crate::tree::PageNode| registry.can_exist_under(&t.kind, &page.kind);
        let placeable = match req.intent {
            ChooseIntent::MoveTo => targets.iter().all(fits),
            _ => targets.is_empty() || targets.iter().any(fits),
        };
        if !placeable {
            tracing::debug!(candidate, intent = %req.intent, "targets cannot be placed under candidate");
            return false;
        }
    }

    actor.has_permission(tree, candidate, req.intent)
}
