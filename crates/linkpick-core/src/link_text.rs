//! Link-text preference: decides whether the caller should replace the text of
//! the link being edited with the title we return.

use serde::{Deserialize, Serialize};

/// The link the chooser was opened with (prefilled form state).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl PriorSelection {
    pub fn new(link_url: Option<&str>, link_text: Option<&str>) -> Self {
        Self {
            link_url: link_url.map(String::from),
            link_text: link_text.map(String::from),
        }
    }
}

/// Returns true if the editor changed the link text field.
///
/// Absent text and empty text are the same thing on both sides. When the text is
/// untouched the caller should keep the existing link/selection content.
pub fn prefer_new_title(prior: &PriorSelection, submitted_text: Option<&str>) -> bool {
    normalized(prior.link_text.as_deref()) != normalized(submitted_text)
}

/// Title for a chosen link: the submitted text if non-empty, else `default_title`.
pub fn choose_title(submitted_text: Option<&str>, default_title: &str) -> String {
    match normalized(submitted_text) {
        "" => default_title.to_string(),
        text => text.to_string(),
    }
}

fn normalized(text: Option<&str>) -> &str {
    text.map(str::trim).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_text_without_prior_is_preferred() {
        assert!(prefer_new_title(&PriorSelection::default(), Some("example")));
    }

    #[test]
    fn no_text_and_no_prior_keeps_existing() {
        assert!(!prefer_new_title(&PriorSelection::default(), None));
        assert!(!prefer_new_title(&PriorSelection::default(), Some("  ")));
    }

    #[test]
    fn unchanged_text_keeps_existing() {
        let prior = PriorSelection::new(Some("http://old.example.com/"), Some("example"));
        assert!(!prefer_new_title(&prior, Some("example")));
    }

    #[test]
    fn edited_text_is_preferred() {
        let prior = PriorSelection::new(Some("http://old.example.com/"), Some("example"));
        assert!(prefer_new_title(&prior, Some("new example")));
    }

    #[test]
    fn clearing_prior_text_counts_as_a_change() {
        let prior = PriorSelection::new(Some("exampleanchor2"), Some("Example Text"));
        assert!(prefer_new_title(&prior, None));
    }

    #[test]
    fn title_falls_back_to_default() {
        assert_eq!(choose_title(None, "http://www.example.com/"), "http://www.example.com/");
        assert_eq!(choose_title(Some(""), "x"), "x");
        assert_eq!(choose_title(Some(" about "), "x"), "about");
    }
}
