//! Shared control, data-display, and overlay primitives used by the composite widgets.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use combobox_core::ComboboxSize;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod overlays;

pub use controls::{Button, IconButton, TextField};
pub use data_display::{Badge, EmptyState, ListSurface};
pub use overlays::{MenuItem, MenuSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard bordered control.
    #[default]
    Standard,
    /// Quiet button used for list rows and inline affordances.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared control sizing tokens.
pub enum ButtonSize {
    /// Dense control.
    Sm,
    /// Default control.
    #[default]
    Md,
    /// Large control.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl From<ComboboxSize> for ButtonSize {
    fn from(size: ComboboxSize) -> Self {
        match size {
            ComboboxSize::Sm => Self::Sm,
            ComboboxSize::Md => Self::Md,
            ComboboxSize::Lg => Self::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    #[default]
    Standard,
    /// Borderless input embedded in another surface.
    Inset,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared badge/text tone.
pub enum TextTone {
    /// Neutral secondary tone.
    #[default]
    Secondary,
    /// Accent tone for aggregate summaries.
    Accent,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
