//! Item descriptors, selection modes, and render locations.

use serde::{Deserialize, Serialize};

/// Whether the widget holds at most one key or an ordered set of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// At most one selected key; toggling another key replaces it.
    Single,
    /// Ordered set of selected keys.
    #[default]
    Multiple,
}

impl SelectMode {
    /// Returns `true` for [`SelectMode::Multiple`].
    pub fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// Where a value is being rendered, passed to custom value renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLocation {
    /// Inside the dropdown item list.
    Item,
    /// As a chip or display value on the trigger surface.
    Trigger,
}

impl RenderLocation {
    /// Stable DOM/styling token for the location.
    pub fn token(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Trigger => "trigger",
        }
    }
}

/// One candidate entry declared by the consuming application for the current render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Unique key stored in the selection when the item is picked.
    pub key: String,
    /// Default display content.
    pub label: Option<String>,
    /// Plain-text equivalent used for search matching.
    pub text_value: Option<String>,
    /// Disabled items render but never reach the selection store.
    pub disabled: bool,
}

impl ItemDescriptor {
    /// Creates an enabled item with no label; it displays and matches on its key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            text_value: None,
            disabled: false,
        }
    }

    /// Sets the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the search text equivalent.
    pub fn text_value(mut self, text_value: impl Into<String>) -> Self {
        self.text_value = Some(text_value.into());
        self
    }

    /// Marks the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Text the search filter matches against: `text_value`, then `label`, then the key.
    pub fn search_text(&self) -> &str {
        self.text_value
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(&self.key)
    }

    /// Plain display text: `label`, then the key.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_prefers_text_value_then_label_then_key() {
        let bare = ItemDescriptor::new("rust");
        assert_eq!(bare.search_text(), "rust");

        let labeled = ItemDescriptor::new("rs").label("Rust");
        assert_eq!(labeled.search_text(), "Rust");
        assert_eq!(labeled.display_text(), "Rust");

        let explicit = ItemDescriptor::new("rs").label("Rust").text_value("rust lang");
        assert_eq!(explicit.search_text(), "rust lang");
        assert_eq!(explicit.display_text(), "Rust");
    }

    #[test]
    fn modes_deserialize_from_snake_case() {
        let mode: SelectMode = serde_json::from_str("\"single\"").expect("mode");
        assert_eq!(mode, SelectMode::Single);
        assert!(!mode.is_multiple());
        assert_eq!(SelectMode::default(), SelectMode::Multiple);
    }
}
