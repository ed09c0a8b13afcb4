//! `linkpick external <url>` – resolve a pasted URL against the site map.

use anyhow::Result;
use linkpick_core::config::LinkpickConfig;
use linkpick_core::protocol::decision_response;
use linkpick_core::sitemap::SiteMap;
use linkpick_core::{ConversionPolicy, ExternalLinkSubmission, LinkResolver, PriorSelection};

use super::print_json;

pub fn run_external(
    cfg: &LinkpickConfig,
    site: SiteMap,
    submission: &ExternalLinkSubmission,
    prior: &PriorSelection,
    policy: Option<ConversionPolicy>,
    prefix: Option<&str>,
) -> Result<()> {
    let prefix = serving_prefix(prefix, cfg, &site);
    let policy = policy.unwrap_or(cfg.external_link_conversion);
    tracing::debug!(url = %submission.url, %policy, prefix = %prefix, "resolving external link");

    let hosts = site_hosts(cfg, &site);
    let resolver = LinkResolver::new(site.with_serving_prefix(&prefix), policy)
        .with_serving_prefix(&prefix)
        .with_site_hosts(hosts);
    let decision = resolver.resolve(submission, prior)?;
    print_json(&decision_response(&decision))
}

/// Command line first, then config, then the site map's own `[site]` section.
fn serving_prefix(flag: Option<&str>, cfg: &LinkpickConfig, site: &SiteMap) -> String {
    flag.map(str::to_string)
        .or_else(|| Some(cfg.serving_prefix.clone()).filter(|p| !p.is_empty()))
        .unwrap_or_else(|| site.serving_prefix().to_string())
}

/// Hosts from the config, or the site map's own hostname.
fn site_hosts(cfg: &LinkpickConfig, site: &SiteMap) -> Vec<String> {
    if cfg.site_hosts.is_empty() {
        vec![site.hostname().to_string()]
    } else {
        cfg.site_hosts.clone()
    }
}
