//! Widget configuration. All fields default, so partial JSON/TOML tables deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::model::SelectMode;
use crate::overflow::{OverflowPolicy, DEFAULT_SUMMARY_TEMPLATE};

/// Styling size token forwarded to the theming layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboboxSize {
    /// Dense control.
    Sm,
    /// Default control.
    #[default]
    Md,
    /// Large control.
    Lg,
}

impl ComboboxSize {
    /// Stable `data-ui-size` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Behavior and presentation settings for one combobox instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxOptions {
    /// Single or multiple selection.
    pub mode: SelectMode,
    /// Trigger text shown while nothing is selected.
    pub placeholder: Option<String>,
    /// Render a search input inside the overlay.
    pub searchable: bool,
    /// Close the overlay after every item activation.
    pub auto_close: bool,
    /// Chip count above which the trigger shows a summary badge; 0 disables it.
    pub max_display_count: usize,
    /// Summary badge template; `{count}` is replaced by the selection size.
    pub max_display_text: String,
    /// Size token.
    pub size: ComboboxSize,
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self {
            mode: SelectMode::Multiple,
            placeholder: None,
            searchable: true,
            // Multi-select keeps this default too; see DESIGN.md before changing it.
            auto_close: true,
            max_display_count: 0,
            max_display_text: DEFAULT_SUMMARY_TEMPLATE.to_string(),
            size: ComboboxSize::Md,
        }
    }
}

impl ComboboxOptions {
    /// Default multi-select options.
    pub fn multiple() -> Self {
        Self::default()
    }

    /// Default single-select options.
    pub fn single() -> Self {
        Self {
            mode: SelectMode::Single,
            ..Self::default()
        }
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the auto-close policy.
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Sets the overflow threshold and template.
    pub fn with_overflow(mut self, max_display_count: usize, template: impl Into<String>) -> Self {
        self.max_display_count = max_display_count;
        self.max_display_text = template.into();
        self
    }

    /// Overflow policy derived from the threshold and template fields.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        OverflowPolicy::new(self.max_display_count, self.max_display_text.clone())
    }
}
