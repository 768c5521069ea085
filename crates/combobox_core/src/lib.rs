//! Headless selectable-value engine behind the combobox and select controls.
//!
//! The crate owns the selection store (controlled and uncontrolled), search filtering, keyboard
//! focus traversal, the overlay open/close lifecycle, item rendering state, and the overflow
//! policy that collapses trigger chips into a summary badge. It has no UI framework dependency;
//! the Leptos components in `editor_ui` drive it through [`reduce_combobox`] and receive trigger
//! content through an [`OutputSlot`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod focus;
pub mod model;
pub mod options;
pub mod overflow;
pub mod overlay;
pub mod reducer;
pub mod registry;
pub mod search;
pub mod selection;
pub mod slot;
pub mod state;
pub mod trigger;

pub use error::ComboboxError;
pub use focus::{FocusCursor, FocusMove};
pub use model::{ItemDescriptor, RenderLocation, SelectMode};
pub use options::{ComboboxOptions, ComboboxSize};
pub use overflow::{OverflowDecision, OverflowPolicy, DEFAULT_SUMMARY_TEMPLATE};
pub use overlay::{CloseReason, OverlayLifecycle};
pub use reducer::{reduce_combobox, ComboboxAction, ComboboxEffect};
pub use registry::{ItemRegistry, ItemView, TextRenderer};
pub use search::SearchFilter;
pub use selection::SelectionStore;
pub use slot::{OutputSlot, SlotHandle};
pub use state::ComboboxState;
pub use trigger::{trigger_content, Chip, TriggerContent};
