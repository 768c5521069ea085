//! Reducer container and context wiring for one combobox instance.
//!
//! The context owns the reactive [`ComboboxState`], the memoized item registry, and the queue of
//! reducer-emitted notifications. The trigger surface registers an [`OutputSlot`] here and every
//! dispatch that changes the displayed selection publishes fresh [`TriggerContent`] into it.
//! Views live in the sibling modules.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::*;

use combobox_core::{
    reduce_combobox, CloseReason, ComboboxAction, ComboboxEffect, ComboboxState, ItemDescriptor,
    ItemRegistry, OutputSlot, RenderLocation, SlotHandle, TriggerContent,
};

use super::effects;

/// Custom view for a value, parameterized by where it is shown.
pub type ValueRenderer = Callback<(String, RenderLocation), View>;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Default)]
/// Owner callbacks for reducer notifications.
pub struct ComboboxHandlers {
    /// Proposed or applied selection after a toggle or clear.
    pub on_value_change: Option<Callback<Vec<String>>>,
    /// Open-state transitions, fired once per transition.
    pub on_open_change: Option<Callback<bool>>,
    /// Search text changes, including the reset on open.
    pub on_search: Option<Callback<String>>,
}

#[derive(Clone, Copy)]
/// Leptos context for reading combobox state and dispatching [`ComboboxAction`] values.
pub struct ComboboxContext {
    /// Reactive widget state.
    pub state: RwSignal<ComboboxState>,
    /// Items declared for the current render.
    pub registry: Memo<ItemRegistry>,
    /// Derived overlay open flag.
    pub is_open: Memo<bool>,
    /// Notifications emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<ComboboxEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ComboboxAction>,
    value_renderer: Option<ValueRenderer>,
    listbox_id: StoredValue<String>,
    trigger: StoredValue<Option<TriggerTarget>>,
}

#[derive(Clone)]
struct TriggerTarget {
    slot: SlotHandle<TriggerContent>,
    published: Trigger,
}

impl ComboboxContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: ComboboxAction) {
        self.dispatch.call(action);
    }

    /// Opens the overlay.
    pub fn open(&self) {
        self.dispatch_action(ComboboxAction::Open);
    }

    /// Closes the overlay on behalf of the consuming application.
    pub fn close(&self) {
        self.dispatch_action(ComboboxAction::Close {
            reason: CloseReason::Explicit,
        });
    }

    /// DOM id of the listbox element, for `aria-controls`.
    pub fn listbox_id(&self) -> String {
        self.listbox_id.get_value()
    }

    /// DOM id of the visible option at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.listbox_id())
    }

    /// Id of the keyboard-highlighted option while the overlay is open, for
    /// `aria-activedescendant`. Tracks state when read inside a reactive scope.
    pub fn active_option_id(&self) -> Option<String> {
        let index = self
            .state
            .with(|state| state.focus.index().filter(|_| state.is_open()))?;
        Some(self.option_id(index))
    }

    /// Registers the trigger surface's slot and publishes the current content into it.
    ///
    /// `published` is notified after every write so the owner can re-read its slot.
    pub fn register_trigger(&self, slot: &OutputSlot<TriggerContent>, published: Trigger) {
        self.trigger.set_value(Some(TriggerTarget {
            slot: slot.handle(),
            published,
        }));
        publish_trigger(self.state, self.registry, self.trigger);
    }

    /// Renders a value through the custom renderer, falling back to its resolved text.
    pub fn render_value(&self, key: String, text: String, location: RenderLocation) -> View {
        match self.value_renderer {
            Some(renderer) => renderer.call((key, location)),
            None => text.into_view(),
        }
    }
}

pub(crate) fn build_registry(items: Vec<ItemDescriptor>) -> ItemRegistry {
    match ItemRegistry::try_new(items.iter().cloned()) {
        Ok(registry) => registry,
        Err(err) => {
            logging::warn!("combobox items: {err}; keeping the first declaration");
            ItemRegistry::new(items)
        }
    }
}

/// Creates the reducer container and provides it to descendant components.
pub(crate) fn provide_combobox(
    initial: ComboboxState,
    items: MaybeSignal<Vec<ItemDescriptor>>,
    handlers: ComboboxHandlers,
    value_renderer: Option<ValueRenderer>,
) -> ComboboxContext {
    let state = create_rw_signal(initial);
    let registry = create_memo(move |_| build_registry(items.get()));
    let is_open = create_memo(move |_| state.with(ComboboxState::is_open));
    let pending = create_rw_signal(Vec::<ComboboxEffect>::new());
    let trigger = store_value(None::<TriggerTarget>);

    let dispatch = Callback::new(move |action: ComboboxAction| {
        let items_changed = matches!(action, ComboboxAction::ItemsChanged);
        let mut next = state.get_untracked();
        let emitted = registry.with_untracked(|registry| reduce_combobox(&mut next, registry, action));

        let changed = state.with_untracked(|current| *current != next);
        if changed {
            state.set(next);
        }
        if changed || items_changed {
            publish_trigger(state, registry, trigger);
        }
        if !emitted.is_empty() {
            let mut queue = pending.get_untracked();
            queue.extend(emitted);
            pending.set(queue);
        }
    });

    let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
    let context = ComboboxContext {
        state,
        registry,
        is_open,
        effects: pending,
        dispatch,
        value_renderer,
        listbox_id: store_value(format!("ui-combobox-{instance}-listbox")),
        trigger,
    };

    provide_context(context);
    effects::install(context, handlers);

    // The first run only subscribes; later runs follow a replaced item list.
    create_effect(move |previous: Option<()>| {
        registry.track();
        if previous.is_some() {
            context.dispatch_action(ComboboxAction::ItemsChanged);
        }
    });

    context
}

// A slot whose owner is gone is forgotten on the first failed write.
fn publish_trigger(
    state: RwSignal<ComboboxState>,
    registry: Memo<ItemRegistry>,
    trigger: StoredValue<Option<TriggerTarget>>,
) {
    let Some(TriggerTarget { slot, published }) = trigger.get_value() else {
        return;
    };
    let content = registry.with_untracked(|registry| {
        state.with_untracked(|state| state.trigger_content(registry, None))
    });
    if slot.write(content) {
        published.notify();
    } else {
        trigger.set_value(None);
    }
}

/// Returns the current [`ComboboxContext`].
///
/// # Panics
///
/// Panics if called outside a `Combobox` or `Select`.
pub fn use_combobox() -> ComboboxContext {
    use_context::<ComboboxContext>().expect("ComboboxContext not provided")
}
