//! Trigger surface display decision.

use serde::{Deserialize, Serialize};

use crate::model::{RenderLocation, SelectMode};
use crate::options::ComboboxOptions;
use crate::overflow::OverflowDecision;
use crate::registry::{ItemRegistry, TextRenderer};
use crate::selection::SelectionStore;

/// One selected value as shown on the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    /// Selected key; removing the chip toggles this key.
    pub key: String,
    /// Resolved display text.
    pub label: String,
}

/// What the always-visible trigger surface displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerContent {
    /// Nothing selected.
    Placeholder(Option<String>),
    /// Single-select display value.
    Value(Chip),
    /// One removable chip per selected key.
    Chips(Vec<Chip>),
    /// Aggregate summary badge.
    Summary(String),
}

impl TriggerContent {
    /// Whether the placeholder is showing.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Plain-text rendering, as an accessible label would read it.
    pub fn text(&self) -> String {
        match self {
            Self::Placeholder(placeholder) => placeholder.clone().unwrap_or_default(),
            Self::Value(chip) => chip.label.clone(),
            Self::Chips(chips) => chips
                .iter()
                .map(|chip| chip.label.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Summary(text) => text.clone(),
        }
    }
}

/// Decides the trigger display: placeholder first, then the overflow decision.
pub fn trigger_content(
    selection: &SelectionStore,
    options: &ComboboxOptions,
    registry: &ItemRegistry,
    renderer: Option<&TextRenderer>,
) -> TriggerContent {
    if selection.is_empty() {
        return TriggerContent::Placeholder(options.placeholder.clone());
    }

    let chip = |key: &str| Chip {
        key: key.to_string(),
        label: registry.display_text(key, RenderLocation::Trigger, renderer),
    };

    if selection.mode() == SelectMode::Single {
        return TriggerContent::Value(chip(&selection.value()[0]));
    }

    match options.overflow_policy().summarize(selection.value()) {
        OverflowDecision::Chips(keys) => {
            TriggerContent::Chips(keys.iter().map(|key| chip(key)).collect())
        }
        OverflowDecision::Summary(text) => TriggerContent::Summary(text),
    }
}
