//! CLI command handlers, one per file.

mod anchor;
mod browse;
mod can_choose;
mod email;
mod external;
mod phone;
mod root;
mod search;

pub use anchor::run_anchor;
pub use browse::run_browse;
pub use can_choose::run_can_choose;
pub use email::run_email;
pub use external::run_external;
pub use phone::run_phone;
pub use root::run_best_root;
pub use search::run_search;

use anyhow::{anyhow, bail, Result};
use linkpick_core::choose::Actor;
use linkpick_core::links::LinkResult;
use linkpick_core::protocol::{link_error_response, link_response, LinkKind};
use linkpick_core::sitemap::SiteMap;
use linkpick_core::LinkError;
use serde_json::Value;
use std::path::Path;

/// Loads the site map from `--site` or the config's `site_map`.
pub fn load_site(path: Option<&Path>) -> Result<SiteMap> {
    let Some(path) = path else {
        bail!("no site map: pass --site PATH or set site_map in the config");
    };
    SiteMap::load(path)
}

/// Actor named on the command line, or a superuser when none is given.
fn actor(site: &SiteMap, name: Option<&str>) -> Result<Actor> {
    match name {
        None => Ok(Actor::superuser("linkpick")),
        Some(name) => site
            .actor(name)
            .cloned()
            .ok_or_else(|| anyhow!("unknown actor '{name}' in site map")),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a built link, or the form error for a rejected submission.
fn print_link(kind: LinkKind, built: Result<LinkResult, LinkError>) -> Result<()> {
    let response = match built {
        Ok(result) => link_response(kind, &result),
        Err(e) if e.is_validation() => {
            tracing::debug!(kind = kind.form_step(), "link form rejected: {e}");
            link_error_response(kind, &e)
        }
        Err(e) => return Err(e.into()),
    };
    print_json(&response)
}
