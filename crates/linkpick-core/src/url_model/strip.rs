//! Query string / fragment removal.

/// Splits `url` at the first `?` or `#` and returns the part before it, plus
/// whether anything was removed.
///
/// A trailing bare `?` counts as stripped: the submitted URL then no longer
/// equals the routed one.
pub fn strip_query_and_fragment(url: &str) -> (&str, bool) {
    match url.find(|c| c == '?' || c == '#') {
        Some(idx) => (&url[..idx], true),
        None => (url, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_query() {
        assert_eq!(strip_query_and_fragment("/about/"), ("/about/", false));
    }

    #[test]
    fn query_and_fragment() {
        assert_eq!(strip_query_and_fragment("/about?a=1#x"), ("/about", true));
        assert_eq!(strip_query_and_fragment("/about#x?a=1"), ("/about", true));
    }

    #[test]
    fn empty_query_still_counts() {
        assert_eq!(strip_query_and_fragment("/about/?"), ("/about/", true));
    }
}
