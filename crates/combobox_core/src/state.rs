//! Aggregate per-instance state.

use serde::{Deserialize, Serialize};

use crate::focus::FocusCursor;
use crate::options::ComboboxOptions;
use crate::overlay::OverlayLifecycle;
use crate::registry::{ItemRegistry, ItemView, TextRenderer};
use crate::search::SearchFilter;
use crate::selection::SelectionStore;
use crate::trigger::{trigger_content, TriggerContent};

/// Complete state of one mounted combobox instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxState {
    /// Selected keys.
    pub selection: SelectionStore,
    /// Search text, reset on every open.
    pub search: SearchFilter,
    /// Keyboard highlight, reset on every open.
    pub focus: FocusCursor,
    /// Open/closed flag.
    pub overlay: OverlayLifecycle,
    /// Behavior settings.
    pub options: ComboboxOptions,
}

impl Default for ComboboxState {
    fn default() -> Self {
        Self::uncontrolled(ComboboxOptions::default(), Vec::<String>::new())
    }
}

impl ComboboxState {
    /// State for a widget that owns its value, seeded from `default_value`.
    pub fn uncontrolled<I, S>(options: ComboboxOptions, default_value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_selection(
            SelectionStore::uncontrolled(options.mode, default_value),
            options,
        )
    }

    /// State for a widget whose value is owned by the consumer.
    pub fn controlled<I, S>(options: ComboboxOptions, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_selection(SelectionStore::controlled(options.mode, value), options)
    }

    fn with_selection(selection: SelectionStore, options: ComboboxOptions) -> Self {
        Self {
            selection,
            search: SearchFilter::default(),
            focus: FocusCursor::default(),
            overlay: OverlayLifecycle::default(),
            options,
        }
    }

    /// Currently displayed selection.
    pub fn value(&self) -> &[String] {
        self.selection.value()
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Trigger display for this state.
    pub fn trigger_content(
        &self,
        registry: &ItemRegistry,
        renderer: Option<&TextRenderer>,
    ) -> TriggerContent {
        trigger_content(&self.selection, &self.options, registry, renderer)
    }

    /// Render state of the visible items.
    pub fn item_views(
        &self,
        registry: &ItemRegistry,
        renderer: Option<&TextRenderer>,
    ) -> Vec<ItemView> {
        registry.render(&self.search, &self.selection, &self.focus, renderer)
    }
}
