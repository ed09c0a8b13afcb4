//! The conversion decision procedure.

use super::{
    ConversionDecision, ConversionPolicy, ExternalLinkSubmission, ExternalTarget, InternalTarget,
    LinkResolver,
};
use crate::error::LinkError;
use crate::link_text::{choose_title, prefer_new_title, PriorSelection};
use crate::resolver::{RouteMatch, RouteResolver};
use crate::url_model::{validate_url, ValidatedUrl};

impl<R: RouteResolver> LinkResolver<R> {
    /// Decides what to do with a submitted external link.
    ///
    /// Validation failures come back as [`ConversionDecision::Rejected`]; only
    /// route resolver failures are returned as `Err`.
    pub fn resolve(
        &self,
        submission: &ExternalLinkSubmission,
        prior: &PriorSelection,
    ) -> Result<ConversionDecision, LinkError> {
        let url = match validate_url(&submission.url) {
            Ok(u) => u,
            Err(e) if e.is_validation() => {
                tracing::debug!(url = %submission.url, "external link rejected");
                return Ok(ConversionDecision::Rejected {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let text = submission.link_text.as_deref();
        let prefer = prefer_new_title(prior, text);
        let kept = |url: &ValidatedUrl| ConversionDecision::KeptExternal {
            url: url.original.clone(),
            title: choose_title(text, &url.original),
            prefer_this_title_as_link_text: prefer,
        };

        if self.policy == ConversionPolicy::Disabled {
            return Ok(kept(&url));
        }
        if let Some(host) = url.host.as_deref() {
            if !self.accepts_host(host) {
                tracing::debug!(host, "external link host is not this site");
                return Ok(kept(&url));
            }
        }

        let path = strip_serving_prefix(&url.path, &self.serving_prefix);
        let RouteMatch {
            content_item_id,
            resolved_url,
        } = self.routes.route(path).map_err(LinkError::Route)?;

        let Some(id) = content_item_id else {
            return Ok(kept(&url));
        };

        let exact = is_exact_match(&url, resolved_url.as_deref());
        tracing::debug!(
            url = %url.original,
            page = id,
            exact,
            policy = %self.policy,
            "external link matches internal page"
        );

        let decision = match (exact, self.policy) {
            (_, ConversionPolicy::Disabled) | (false, ConversionPolicy::Exact) => kept(&url),
            (true, ConversionPolicy::Exact) | (true, ConversionPolicy::Default) => {
                // Exact implies the page has a URL.
                let page_url = resolved_url.unwrap_or_else(|| url.original.clone());
                ConversionDecision::Converted {
                    title: choose_title(text, &page_url),
                    url: page_url,
                    content_item_id: id,
                    prefer_this_title_as_link_text: prefer,
                }
            }
            (_, ConversionPolicy::Confirm) | (false, ConversionPolicy::Default) => {
                ConversionDecision::NeedsConfirmation {
                    external: ExternalTarget {
                        url: url.original.clone(),
                        title: choose_title(text, &url.original),
                    },
                    internal: InternalTarget {
                        url: resolved_url,
                        content_item_id: id,
                    },
                }
            }
        };
        Ok(decision)
    }
}

/// Removes the serving prefix from `path` if present.
///
/// `prefix` has no surrounding slashes. Paths outside the prefix are returned
/// unchanged so links written without it still resolve.
pub fn strip_serving_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    let Some(rest) = path.strip_prefix('/').and_then(|p| p.strip_prefix(prefix)) else {
        return path;
    };
    if rest.is_empty() {
        "/"
    } else if rest.starts_with('/') {
        rest
    } else {
        // "/sitemap/" must not match prefix "site".
        path
    }
}

/// The submitted URL is exactly the page's canonical URL, with nothing stripped.
fn is_exact_match(url: &ValidatedUrl, canonical: Option<&str>) -> bool {
    let Some(canonical) = canonical else {
        return false;
    };
    if url.stripped {
        return false;
    }
    if url.is_relative() || canonical.starts_with("http://") || canonical.starts_with("https://") {
        url.original == canonical
    } else {
        url.path == canonical
    }
}
