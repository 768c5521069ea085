//! Leptos components for editor-style interfaces.
//!
//! The crate owns a small primitive set (buttons, badges, fields, menu surfaces, icons), the
//! [`Popover`] overlay collaborator, and the [`Combobox`] / [`Select`] widgets driven by the
//! headless [`combobox_core`] reducer. Every element carries the stable `data-ui-*` DOM contract
//! (`data-ui-kind`, `data-ui-slot`, `data-ui-state`, `data-ui-selected`, `data-ui-focused`,
//! `data-ui-disabled`) that styling layers consume. Call [`init`] once at startup to install the
//! baseline stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod combobox;
mod icon;
mod popover;
mod primitives;
mod style;

pub use combobox::{
    use_combobox, Combobox, ComboboxContext, ComboboxHandlers, ComboboxItem, ComboboxList,
    ComboboxSearchInput, ComboboxTrigger, Select, ValueRenderer,
};
pub use icon::{Icon, IconName, IconSize};
pub use popover::{Popover, PopoverContent, PopoverContext};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, EmptyState, FieldVariant, IconButton, ListSurface,
    MenuItem, MenuSurface, TextField, TextTone,
};
pub use style::{init, STYLESHEET};

/// Convenience imports for application crates mounting the widgets.
pub mod prelude {
    pub use combobox_core::{
        CloseReason, ComboboxOptions, ComboboxSize, ItemDescriptor, RenderLocation,
    };

    pub use crate::{
        init, Badge, Button, ButtonSize, ButtonVariant, Combobox, ComboboxItem, ComboboxList,
        ComboboxSearchInput, ComboboxTrigger, Icon, IconButton, IconName, IconSize, MenuItem,
        MenuSurface, Popover, PopoverContent, Select, TextField,
    };
}
