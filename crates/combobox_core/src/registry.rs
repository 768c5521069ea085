//! Declared candidate items, visibility filtering, and per-item render state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ComboboxError;
use crate::focus::FocusCursor;
use crate::model::{ItemDescriptor, RenderLocation};
use crate::search::SearchFilter;
use crate::selection::SelectionStore;

/// Custom value-to-text mapping, parameterized by where the value is shown.
pub type TextRenderer = dyn Fn(&str, RenderLocation) -> String;

/// Render state for one visible item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Item key.
    pub key: String,
    /// Position in the visible list.
    pub index: usize,
    /// Resolved display text.
    pub label: String,
    /// Present in the selection store.
    pub selected: bool,
    /// Under the focus cursor.
    pub focused: bool,
    /// Activation is ignored.
    pub disabled: bool,
}

/// The item list declared for the current render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRegistry {
    items: Vec<ItemDescriptor>,
}

impl ItemRegistry {
    /// Builds a registry, keeping the first declaration of any repeated key.
    pub fn new(items: impl IntoIterator<Item = ItemDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.key.clone()))
            .collect();
        Self { items }
    }

    /// Builds a registry, rejecting repeated keys.
    ///
    /// # Errors
    ///
    /// Returns [`ComboboxError::DuplicateItemKey`] for the first key declared twice.
    pub fn try_new(items: impl IntoIterator<Item = ItemDescriptor>) -> Result<Self, ComboboxError> {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for item in items {
            if !seen.insert(item.key.clone()) {
                return Err(ComboboxError::DuplicateItemKey(item.key));
            }
            collected.push(item);
        }
        Ok(Self { items: collected })
    }

    /// All declared items in declaration order.
    pub fn items(&self) -> &[ItemDescriptor] {
        &self.items
    }

    /// Looks up a declared item.
    pub fn get(&self, key: &str) -> Option<&ItemDescriptor> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Items passing the search filter, in declaration order.
    pub fn visible<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> impl Iterator<Item = &'a ItemDescriptor> + 'a {
        self.items.iter().filter(move |item| filter.is_visible(item))
    }

    /// Number of items passing the search filter.
    pub fn visible_len(&self, filter: &SearchFilter) -> usize {
        self.visible(filter).count()
    }

    /// Visible item at `index`.
    pub fn visible_at<'a>(&'a self, filter: &'a SearchFilter, index: usize) -> Option<&'a ItemDescriptor> {
        self.visible(filter).nth(index)
    }

    /// Position of `key` in the visible list.
    pub fn visible_position(&self, filter: &SearchFilter, key: &str) -> Option<usize> {
        self.visible(filter).position(|item| item.key == key)
    }

    /// Display text for `key`, falling back to the raw key for undeclared values.
    pub fn display_text(
        &self,
        key: &str,
        location: RenderLocation,
        renderer: Option<&TextRenderer>,
    ) -> String {
        if let Some(renderer) = renderer {
            return renderer(key, location);
        }
        self.get(key)
            .map(|item| item.display_text().to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Render state for every visible item.
    pub fn render(
        &self,
        filter: &SearchFilter,
        selection: &SelectionStore,
        focus: &FocusCursor,
        renderer: Option<&TextRenderer>,
    ) -> Vec<ItemView> {
        self.visible(filter)
            .enumerate()
            .map(|(index, item)| ItemView {
                key: item.key.clone(),
                index,
                label: self.display_text(&item.key, RenderLocation::Item, renderer),
                selected: selection.contains(&item.key),
                focused: focus.is_focused(index),
                disabled: item.disabled,
            })
            .collect()
    }
}

impl FromIterator<ItemDescriptor> for ItemRegistry {
    fn from_iter<T: IntoIterator<Item = ItemDescriptor>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::focus::FocusMove;
    use crate::model::SelectMode;

    fn languages() -> ItemRegistry {
        ItemRegistry::new([
            ItemDescriptor::new("a").label("Alpha").text_value("shared token"),
            ItemDescriptor::new("b").label("Bravo"),
            ItemDescriptor::new("c").label("Charlie").text_value("another SHARED entry"),
            ItemDescriptor::new("d").label("Delta").disabled(),
        ])
    }

    #[test]
    fn filter_keeps_declaration_order() {
        let registry = languages();
        let mut filter = SearchFilter::default();
        filter.set_text("shared");

        let visible: Vec<&str> = registry
            .visible(&filter)
            .map(|item| item.key.as_str())
            .collect();
        assert_eq!(visible, vec!["a", "c"]);
    }

    #[test]
    fn render_reports_selected_focused_and_disabled() {
        let registry = languages();
        let filter = SearchFilter::default();
        let selection = SelectionStore::uncontrolled(SelectMode::Multiple, ["b"]);
        let mut focus = FocusCursor::default();
        focus.apply(FocusMove::Last, registry.visible_len(&filter));

        let views = registry.render(&filter, &selection, &focus, None);
        assert_eq!(views.len(), 4);
        assert!(views[1].selected);
        assert_eq!(views[1].label, "Bravo");
        assert!(views[3].focused);
        assert!(views[3].disabled);
        assert!(!views[0].selected && !views[0].focused);
    }

    #[test]
    fn unknown_keys_display_raw() {
        let registry = languages();
        assert_eq!(
            registry.display_text("zulu", RenderLocation::Trigger, None),
            "zulu"
        );
    }

    #[test]
    fn custom_renderer_receives_location() {
        let registry = languages();
        let renderer = |key: &str, location: RenderLocation| format!("{}:{key}", location.token());
        assert_eq!(
            registry.display_text("a", RenderLocation::Trigger, Some(&renderer)),
            "trigger:a"
        );
        let views = registry.render(
            &SearchFilter::default(),
            &SelectionStore::default(),
            &FocusCursor::default(),
            Some(&renderer),
        );
        assert_eq!(views[0].label, "item:a");
    }

    #[test]
    fn duplicate_keys_keep_first_or_fail_strictly() {
        let items = [
            ItemDescriptor::new("x").label("first"),
            ItemDescriptor::new("x").label("second"),
        ];
        let lenient = ItemRegistry::new(items.clone());
        assert_eq!(lenient.items().len(), 1);
        assert_eq!(lenient.get("x").and_then(|item| item.label.as_deref()), Some("first"));

        let err = ItemRegistry::try_new(items).expect_err("duplicate");
        assert_eq!(err, ComboboxError::DuplicateItemKey("x".to_string()));
    }
}
