//! Keyboard routing for the trigger surface and the open overlay.
//!
//! DOM focus stays on the trigger when the overlay has no search field, so the trigger forwards
//! navigation keys to the reducer while open. Inside a text field, Home and End keep moving the
//! caret.

use leptos::ev::KeyboardEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use combobox_core::ComboboxAction;

use super::context::ComboboxContext;

/// Action for a key pressed on the trigger surface.
pub(crate) fn trigger_key_action(key: &str, open: bool) -> Option<ComboboxAction> {
    if open {
        return overlay_key_action(key, false);
    }
    match key {
        "Enter" | " " | "ArrowDown" => Some(ComboboxAction::Open),
        _ => None,
    }
}

/// Action for a key pressed inside the open overlay.
pub(crate) fn overlay_key_action(key: &str, editing_text: bool) -> Option<ComboboxAction> {
    if editing_text && matches!(key, "Home" | "End") {
        return None;
    }
    ComboboxAction::from_key(key)
}

pub(crate) fn handle_trigger_key(combobox: ComboboxContext, ev: KeyboardEvent) {
    let open = combobox.is_open.get_untracked();
    dispatch_key(combobox, &ev, trigger_key_action(&ev.key(), open));
}

pub(crate) fn handle_overlay_key(combobox: ComboboxContext, ev: KeyboardEvent) {
    let editing_text = ev
        .target()
        .is_some_and(|target| target.dyn_ref::<web_sys::HtmlInputElement>().is_some());
    dispatch_key(combobox, &ev, overlay_key_action(&ev.key(), editing_text));
}

fn dispatch_key(combobox: ComboboxContext, ev: &KeyboardEvent, action: Option<ComboboxAction>) {
    let Some(action) = action else {
        return;
    };
    ev.prevent_default();
    combobox.dispatch_action(action);
}
