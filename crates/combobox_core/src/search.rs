//! Search text and item visibility.

use serde::{Deserialize, Serialize};

use crate::model::ItemDescriptor;

/// Current search text and the item visibility predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    text: String,
}

impl SearchFilter {
    /// Current search text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the search text. Returns `false` when `text` equals the current text.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    /// Resets to the empty query, returning whether anything changed.
    pub fn reset(&mut self) -> bool {
        self.set_text(String::new())
    }

    /// Case-insensitive substring match against the item's search text.
    pub fn is_visible(&self, item: &ItemDescriptor) -> bool {
        matches_query(item.search_text(), &self.text)
    }
}

pub(crate) fn matches_query(haystack: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_shows_everything() {
        let filter = SearchFilter::default();
        assert!(filter.is_visible(&ItemDescriptor::new("anything")));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let mut filter = SearchFilter::default();
        filter.set_text("TYPE");
        assert!(filter.is_visible(&ItemDescriptor::new("ts").label("TypeScript")));
        assert!(filter.is_visible(&ItemDescriptor::new("proto").text_value("prototype chain")));
        assert!(!filter.is_visible(&ItemDescriptor::new("rs").label("Rust")));
    }

    #[test]
    fn no_fuzzy_matching() {
        let mut filter = SearchFilter::default();
        filter.set_text("tpscr");
        assert!(!filter.is_visible(&ItemDescriptor::new("ts").label("TypeScript")));
    }

    #[test]
    fn identical_text_is_a_no_op() {
        let mut filter = SearchFilter::default();
        assert!(filter.set_text("ab"));
        assert!(!filter.set_text("ab"));
        assert!(filter.reset());
        assert!(!filter.reset());
        assert_eq!(filter.text(), "");
    }
}
