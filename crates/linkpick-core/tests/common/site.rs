//! Fixture site: a small page tree with events, business pages and a couple
//! of editors.
//!
//! ```text
//! 1  Root                       wagtailcore.page
//! └─ 2  Home (/)                wagtailcore.page
//!    ├─ 3  About                tests.simplepage
//!    │  ├─ 4  Contact           tests.simplepage
//!    │  └─ 5  People            tests.simplepage
//!    ├─ 6  Events               tests.eventindex
//!    │  ├─ 7  First event       tests.eventpage
//!    │  ├─ 8  Second event      tests.eventpage
//!    │  └─ 9  Businessy events  tests.businessindex
//!    │     └─ 10 Board meetings tests.businesssubindex
//!    ├─ 11 Secret plans         tests.simplepage
//!    │  └─ 12 Steal underpants  tests.simplepage
//!    └─ 13 Lonely event         tests.singleeventpage
//! ```

#![allow(dead_code)]

use linkpick_core::sitemap::SiteMap;

pub const ROOT: u64 = 1;
pub const HOME: u64 = 2;
pub const ABOUT: u64 = 3;
pub const CONTACT: u64 = 4;
pub const EVENTS: u64 = 6;
pub const BUSINESSY_EVENTS: u64 = 9;
pub const BOARD_MEETINGS: u64 = 10;
pub const SECRET_PLANS: u64 = 11;
pub const STEAL_UNDERPANTS: u64 = 12;
pub const LONELY_EVENT: u64 = 13;

const KINDS: &str = r#"
[site]
root_page = 2

[[kinds]]
name = "tests.SimplePage"
verbose_name = "Simple page"

[[kinds]]
name = "tests.EventIndex"
verbose_name = "Event index"

[[kinds]]
name = "tests.EventPage"
verbose_name = "Event page"
parent_page_types = ["tests.EventIndex"]

[[kinds]]
name = "tests.SingleEventPage"
verbose_name = "Single event"
extends = "tests.EventPage"

[[kinds]]
name = "tests.BusinessIndex"
verbose_name = "Business index"

[[kinds]]
name = "tests.BusinessSubIndex"
verbose_name = "Business sub index"
parent_page_types = ["tests.BusinessIndex", "tests.EventIndex"]

[[kinds]]
name = "tests.BusinessChild"
verbose_name = "Business child"
parent_page_types = ["tests.BusinessSubIndex"]

[[kinds]]
name = "wagtailcore.Site"
verbose_name = "Site"
is_page = false

[[actors]]
name = "admin"
superuser = true

[[actors]]
name = "eventeditor"
[[actors.grants]]
page = 6
intents = ["copy_to", "move_to", "bulk_move_to"]
"#;

const PAGES: &[(u64, Option<u64>, &str, &str, &str)] = &[
    (1, None, "wagtailcore.page", "Root", ""),
    (2, Some(1), "wagtailcore.page", "Welcome to the Wagtail test site!", "home"),
    (3, Some(2), "tests.simplepage", "About", "about"),
    (4, Some(3), "tests.simplepage", "Contact", "contact"),
    (5, Some(3), "tests.simplepage", "People", "people"),
    (6, Some(2), "tests.eventindex", "Events", "events"),
    (7, Some(6), "tests.eventpage", "First event", "first-event"),
    (8, Some(6), "tests.eventpage", "Second event", "second-event"),
    (9, Some(6), "tests.businessindex", "Businessy events", "businessy-events"),
    (10, Some(9), "tests.businesssubindex", "Board meetings", "board-meetings"),
    (11, Some(2), "tests.simplepage", "Secret plans", "secret-plans"),
    (12, Some(11), "tests.simplepage", "Steal underpants", "steal-underpants"),
    (13, Some(2), "tests.singleeventpage", "Lonely event", "lonely-event"),
];

/// One `[[pages]]` entry.
pub fn page_toml(id: u64, parent: Option<u64>, kind: &str, title: &str, slug: &str) -> String {
    let parent = parent.map(|p| format!("parent = {p}\n")).unwrap_or_default();
    format!(
        "\n[[pages]]\nid = {id}\n{parent}kind = \"{kind}\"\ntitle = \"{title}\"\nslug = \"{slug}\"\n"
    )
}

/// Fixture TOML without the pages in `skip`; `extra` is appended (more `[[pages]]` entries).
pub fn site_toml(skip: &[u64], extra: &str) -> String {
    let mut out = KINDS.to_string();
    for (id, parent, kind, title, slug) in PAGES.iter().filter(|p| !skip.contains(&p.0)) {
        out.push_str(&page_toml(*id, *parent, kind, title, slug));
    }
    out.push_str(extra);
    out
}

pub fn site() -> SiteMap {
    SiteMap::from_toml_str(&site_toml(&[], "")).expect("fixture site map")
}

pub fn site_with(extra: &str) -> SiteMap {
    SiteMap::from_toml_str(&site_toml(&[], extra)).expect("fixture site map")
}

/// Fixture site minus leaf pages in `skip`.
pub fn site_without(skip: &[u64]) -> SiteMap {
    SiteMap::from_toml_str(&site_toml(skip, "")).expect("fixture site map")
}
