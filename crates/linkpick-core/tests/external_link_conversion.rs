//! Pasted URLs against the fixture site, for each way the site can be served.

mod common;

use common::site::{self, ABOUT};
use linkpick_core::conversion::ConversionDecision;
use linkpick_core::protocol::decision_response;
use linkpick_core::sitemap::SiteMap;
use linkpick_core::{ConversionPolicy, ExternalLinkSubmission, LinkResolver, PriorSelection};

fn resolver(prefix: &str, policy: ConversionPolicy) -> LinkResolver<SiteMap> {
    LinkResolver::new(site::site().with_serving_prefix(prefix), policy).with_serving_prefix(prefix)
}

fn submit(resolver: &LinkResolver<SiteMap>, url: &str) -> ConversionDecision {
    resolver
        .resolve(
            &ExternalLinkSubmission::new(url, Some("about")),
            &PriorSelection::default(),
        )
        .unwrap()
}

fn assert_converted(decision: &ConversionDecision, url: &str) {
    match decision {
        ConversionDecision::Converted {
            url: got,
            content_item_id,
            ..
        } => {
            assert_eq!(got, url);
            assert_eq!(*content_item_id, ABOUT);
        }
        other => panic!("expected Converted, got {other:?}"),
    }
}

fn assert_confirmation(decision: &ConversionDecision, external: &str, internal: Option<&str>) {
    match decision {
        ConversionDecision::NeedsConfirmation {
            external: ext,
            internal: int,
        } => {
            assert_eq!(ext.url, external);
            assert_eq!(int.url.as_deref(), internal);
            assert_eq!(int.content_item_id, ABOUT);
        }
        other => panic!("expected NeedsConfirmation, got {other:?}"),
    }
}

fn assert_kept(decision: &ConversionDecision, url: &str) {
    match decision {
        ConversionDecision::KeptExternal { url: got, .. } => assert_eq!(got, url),
        other => panic!("expected KeptExternal, got {other:?}"),
    }
}

#[test]
fn root_served_site() {
    let r = resolver("", ConversionPolicy::Default);
    assert_converted(&submit(&r, "http://localhost/about/"), "/about/");
    assert_converted(&submit(&r, "/about/"), "/about/");
    assert_confirmation(
        &submit(&r, "http://localhost/about?test=1"),
        "http://localhost/about?test=1",
        Some("/about/"),
    );
    assert_kept(
        &submit(&r, "http://www.example.com/"),
        "http://www.example.com/",
    );
}

#[test]
fn foreign_hosts_are_never_converted() {
    let r = resolver("", ConversionPolicy::Default);
    for url in [
        "http://www.example.com/",
        "http://www.example.com/about/",
        "https://www.example.com/events/first-event/",
    ] {
        assert_kept(&submit(&r, url), url);
    }
    assert!(matches!(
        submit(&r, "http://localhost/"),
        ConversionDecision::Converted {
            content_item_id: site::HOME,
            ..
        }
    ));
}

#[test]
fn nested_pages_resolve() {
    let r = resolver("", ConversionPolicy::Default);
    match submit(&r, "/events/businessy-events/board-meetings/") {
        ConversionDecision::Converted {
            content_item_id, ..
        } => assert_eq!(content_item_id, site::BOARD_MEETINGS),
        other => panic!("expected Converted, got {other:?}"),
    }
}

#[test]
fn prefixed_sites() {
    for prefix in ["site/", "en/", "en/site/"] {
        let r = resolver(prefix, ConversionPolicy::Default);
        let canonical = format!("/{prefix}about/");

        // Without the prefix the page still matches, but the URL differs.
        assert_confirmation(
            &submit(&r, "http://localhost/about/"),
            "http://localhost/about/",
            Some(&canonical),
        );
        assert_confirmation(&submit(&r, "/about/"), "/about/", Some(&canonical));
        assert_confirmation(
            &submit(&r, "http://localhost/about?test=1"),
            "http://localhost/about?test=1",
            Some(&canonical),
        );

        assert_converted(&submit(&r, &format!("http://localhost/{prefix}about/")), &canonical);
        assert_converted(&submit(&r, &canonical), &canonical);

        let with_query = format!("http://localhost/{prefix}about?test=1");
        assert_confirmation(&submit(&r, &with_query), &with_query, Some(&canonical));
    }
}

#[test]
fn prefixed_sites_under_other_policies() {
    for prefix in ["site/", "en/", "en/site/"] {
        let url = format!("http://localhost/{prefix}about/");
        let canonical = format!("/{prefix}about/");

        let disabled = resolver(prefix, ConversionPolicy::Disabled);
        assert_kept(&submit(&disabled, &url), &url);

        let exact = resolver(prefix, ConversionPolicy::Exact);
        assert_converted(&submit(&exact, &url), &canonical);
        assert_kept(&submit(&exact, "http://localhost/about/"), "http://localhost/about/");

        let confirm = resolver(prefix, ConversionPolicy::Confirm);
        assert_confirmation(&submit(&confirm, &url), &url, Some(&canonical));
    }
}

#[test]
fn unroutable_site_always_confirms() {
    let r = LinkResolver::new(site::site().unroutable(), ConversionPolicy::Default);
    for url in [
        "http://localhost/about/",
        "http://localhost/about?test=1",
        "/about/",
    ] {
        let decision = submit(&r, url);
        assert_confirmation(&decision, url, None);
        let json = decision_response(&decision);
        assert_eq!(json["step"], "confirm_external_to_internal");
        assert!(json["internal"]["url"].is_null());
        assert_eq!(json["internal"]["id"], ABOUT);
    }
}

#[test]
fn response_shapes() {
    let r = resolver("", ConversionPolicy::Default);

    let json = decision_response(&submit(&r, "http://localhost/about/"));
    assert_eq!(json["step"], "external_link_chosen");
    assert_eq!(json["result"]["url"], "/about/");
    assert_eq!(json["result"]["title"], "about");
    assert_eq!(json["result"]["id"], ABOUT);

    let json = decision_response(&submit(&r, "ftp://localhost/about/"));
    assert_eq!(json["step"], "external_link");
    assert_eq!(json["error"], "Enter a valid URL.");
}

#[test]
fn link_text_preference_follows_prior_selection() {
    let r = resolver("", ConversionPolicy::Default);
    let sub = ExternalLinkSubmission::new("http://www.example.com/", Some("Torchbox"));

    let unchanged = PriorSelection::new(Some("https://torchbox.com/"), Some("Torchbox"));
    match r.resolve(&sub, &unchanged).unwrap() {
        ConversionDecision::KeptExternal {
            title,
            prefer_this_title_as_link_text,
            ..
        } => {
            assert_eq!(title, "Torchbox");
            assert!(!prefer_this_title_as_link_text);
        }
        other => panic!("expected KeptExternal, got {other:?}"),
    }

    let changed = PriorSelection::new(Some("https://torchbox.com/"), Some("Old text"));
    match r.resolve(&sub, &changed).unwrap() {
        ConversionDecision::KeptExternal {
            prefer_this_title_as_link_text,
            ..
        } => assert!(prefer_this_title_as_link_text),
        other => panic!("expected KeptExternal, got {other:?}"),
    }
}

#[test]
fn site_hosts_limit_conversion() {
    let r = resolver("", ConversionPolicy::Default).with_site_hosts(["localhost"]);
    assert_converted(&submit(&r, "http://LOCALHOST/about/"), "/about/");
    assert_kept(
        &submit(&r, "http://elsewhere.example/about/"),
        "http://elsewhere.example/about/",
    );
}
