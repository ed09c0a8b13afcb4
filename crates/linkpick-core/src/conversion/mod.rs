//! External link resolution: decides whether a submitted URL should become a
//! link to an internal page.
//!
//! Flow: validate the URL, strip its query string and fragment, strip the serving
//! prefix, ask the [`RouteResolver`] which page owns the remaining path, then apply
//! the [`ConversionPolicy`] depending on whether the submitted URL is an exact
//! match for the page's canonical URL.

mod decision;
mod policy;
mod resolve;

pub use decision::{
    ConversionDecision, ExternalLinkSubmission, ExternalTarget, InternalTarget,
};
pub use policy::ConversionPolicy;
pub use resolve::strip_serving_prefix;

use crate::config::LinkpickConfig;
use crate::resolver::RouteResolver;

/// Host a resolver treats as this site until told otherwise.
pub const DEFAULT_SITE_HOST: &str = "localhost";

/// Resolves submitted external links against a set of routes.
#[derive(Debug, Clone)]
pub struct LinkResolver<R> {
    routes: R,
    policy: ConversionPolicy,
    /// Serving prefix without surrounding slashes (`""`, `"site"`, `"en/site"`).
    serving_prefix: String,
    /// Hosts considered to be this site; absolute URLs on other hosts stay
    /// external. Empty means no absolute URL is local.
    site_hosts: Vec<String>,
}

impl<R: RouteResolver> LinkResolver<R> {
    pub fn new(routes: R, policy: ConversionPolicy) -> Self {
        Self {
            routes,
            policy,
            serving_prefix: String::new(),
            site_hosts: vec![DEFAULT_SITE_HOST.to_string()],
        }
    }

    /// Builds a resolver using the policy, prefix and hosts from `cfg`.
    ///
    /// An empty `site_hosts` in the config keeps [`DEFAULT_SITE_HOST`].
    pub fn from_config(routes: R, cfg: &LinkpickConfig) -> Self {
        let resolver = Self::new(routes, cfg.external_link_conversion)
            .with_serving_prefix(&cfg.serving_prefix);
        if cfg.site_hosts.is_empty() {
            resolver
        } else {
            resolver.with_site_hosts(cfg.site_hosts.iter().cloned())
        }
    }

    pub fn with_serving_prefix(mut self, prefix: &str) -> Self {
        self.serving_prefix = prefix.trim_matches('/').to_string();
        self
    }

    pub fn with_site_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.site_hosts = hosts
            .into_iter()
            .map(|h| h.into().to_ascii_lowercase())
            .collect();
        self
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    pub fn serving_prefix(&self) -> &str {
        &self.serving_prefix
    }

    pub fn routes(&self) -> &R {
        &self.routes
    }

    pub fn site_hosts(&self) -> &[String] {
        &self.site_hosts
    }

    fn accepts_host(&self, host: &str) -> bool {
        self.site_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}
