//! Effect-queue executor forwarding reducer notifications to owner callbacks.

use leptos::*;

use combobox_core::ComboboxEffect;

use super::context::{ComboboxContext, ComboboxHandlers};

/// Installs the executor that drains reducer-emitted notifications in order.
pub fn install(combobox: ComboboxContext, handlers: ComboboxHandlers) {
    // Clear the queue before running handlers so a handler that dispatches enqueues a fresh batch.
    create_effect(move |_| {
        let queued = combobox.effects.get();
        if queued.is_empty() {
            return;
        }

        combobox.effects.set(Vec::new());

        for effect in queued {
            run_effect(handlers, effect);
        }
    });
}

fn run_effect(handlers: ComboboxHandlers, effect: ComboboxEffect) {
    match effect {
        ComboboxEffect::ValueChange(value) => {
            if let Some(on_value_change) = handlers.on_value_change {
                on_value_change.call(value);
            }
        }
        ComboboxEffect::OpenChange(open) => {
            if let Some(on_open_change) = handlers.on_open_change {
                on_open_change.call(open);
            }
        }
        ComboboxEffect::SearchChange(text) => {
            if let Some(on_search) = handlers.on_search {
                on_search.call(text);
            }
        }
    }
}
