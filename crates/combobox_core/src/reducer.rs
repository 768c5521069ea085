//! Reducer actions, change notifications, and transition logic for the combobox.

use crate::focus::FocusMove;
use crate::overlay::CloseReason;
use crate::registry::ItemRegistry;
use crate::state::ComboboxState;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_combobox`].
pub enum ComboboxAction {
    /// Trigger surface activated: opens, or closes when already open.
    PressTrigger,
    /// Open the overlay.
    Open,
    /// Close the overlay. The overlay collaborator reports dismissals through this too.
    Close {
        /// Caller category.
        reason: CloseReason,
    },
    /// Replace the search text.
    SetSearchText {
        /// New query.
        text: String,
    },
    /// Keyboard focus movement over the visible items.
    MoveFocus(FocusMove),
    /// Pointer moved over an item.
    HoverItem {
        /// Hovered item key.
        key: String,
    },
    /// Activate the item under the focus cursor.
    ActivateFocused,
    /// Pointer activation on a list item.
    ActivateItem {
        /// Activated item key.
        key: String,
    },
    /// Close affordance on a trigger chip.
    RemoveChip {
        /// Key of the chip being removed.
        key: String,
    },
    /// Programmatic toggle. The key does not have to be declared.
    Toggle {
        /// Key to toggle.
        key: String,
    },
    /// Clear the selection.
    Clear,
    /// Owner-fed value for a controlled widget.
    SyncValue {
        /// Value supplied by the owner on this render.
        value: Vec<String>,
    },
    /// The declared item list was replaced.
    ItemsChanged,
}

impl ComboboxAction {
    /// Maps a keydown inside the open overlay to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(movement) = FocusMove::from_key(key) {
            return Some(Self::MoveFocus(movement));
        }
        match key {
            "Enter" => Some(Self::ActivateFocused),
            "Escape" => Some(Self::Close {
                reason: CloseReason::Escape,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Change notifications emitted by [`reduce_combobox`] for the owner to observe.
pub enum ComboboxEffect {
    /// Next selection value. In controlled mode this is only a proposal.
    ValueChange(Vec<String>),
    /// Overlay open state changed.
    OpenChange(bool),
    /// Search text changed.
    SearchChange(String),
}

/// Applies a [`ComboboxAction`] and collects resulting notifications.
///
/// All dependent recomputation for one interaction happens here: selection, auto-close, search
/// reset on open, and focus re-clamping after the visible list changes. Misuse such as
/// activating a disabled item is ignored without notifications.
pub fn reduce_combobox(
    state: &mut ComboboxState,
    registry: &ItemRegistry,
    action: ComboboxAction,
) -> Vec<ComboboxEffect> {
    let mut effects = Vec::new();
    match action {
        ComboboxAction::PressTrigger => {
            if state.overlay.is_open() {
                close(state, CloseReason::TriggerToggle, &mut effects);
            } else {
                open(state, &mut effects);
            }
        }
        ComboboxAction::Open => open(state, &mut effects),
        ComboboxAction::Close { reason } => close(state, reason, &mut effects),
        ComboboxAction::SetSearchText { text } => {
            if state.search.set_text(text) {
                effects.push(ComboboxEffect::SearchChange(state.search.text().to_string()));
                reclamp_focus(state, registry);
            }
        }
        ComboboxAction::MoveFocus(movement) => {
            let len = registry.visible_len(&state.search);
            state.focus.apply(movement, len);
        }
        ComboboxAction::HoverItem { key } => {
            if let Some(index) = registry.visible_position(&state.search, &key) {
                let len = registry.visible_len(&state.search);
                state.focus.set(index, len);
            }
        }
        ComboboxAction::ActivateFocused => {
            let focused = state
                .focus
                .index()
                .and_then(|index| registry.visible_at(&state.search, index))
                .map(|item| item.key.clone());
            if let Some(key) = focused {
                activate(state, registry, &key, &mut effects);
            }
        }
        ComboboxAction::ActivateItem { key } => activate(state, registry, &key, &mut effects),
        ComboboxAction::RemoveChip { key } | ComboboxAction::Toggle { key } => {
            toggle(state, &key, &mut effects);
        }
        ComboboxAction::Clear => {
            if let Some(next) = state.selection.clear() {
                effects.push(ComboboxEffect::ValueChange(next));
            }
        }
        ComboboxAction::SyncValue { value } => {
            state.selection.sync(value);
        }
        ComboboxAction::ItemsChanged => reclamp_focus(state, registry),
    }
    effects
}

fn open(state: &mut ComboboxState, effects: &mut Vec<ComboboxEffect>) {
    if !state.overlay.open() {
        return;
    }
    state.focus.reset();
    if state.search.reset() {
        effects.push(ComboboxEffect::SearchChange(String::new()));
    }
    effects.push(ComboboxEffect::OpenChange(true));
}

fn close(state: &mut ComboboxState, reason: CloseReason, effects: &mut Vec<ComboboxEffect>) {
    if state.overlay.close(reason) {
        effects.push(ComboboxEffect::OpenChange(false));
    }
}

fn toggle(state: &mut ComboboxState, key: &str, effects: &mut Vec<ComboboxEffect>) {
    let next = state.selection.toggle(key);
    effects.push(ComboboxEffect::ValueChange(next));
}

fn activate(
    state: &mut ComboboxState,
    registry: &ItemRegistry,
    key: &str,
    effects: &mut Vec<ComboboxEffect>,
) {
    let Some(item) = registry.visible(&state.search).find(|item| item.key == key) else {
        return;
    };
    if item.disabled {
        return;
    }
    toggle(state, key, effects);
    if state.options.auto_close {
        close(state, CloseReason::AfterSelect, effects);
    }
}

fn reclamp_focus(state: &mut ComboboxState, registry: &ItemRegistry) {
    let len = registry.visible_len(&state.search);
    state.focus.clamp(len);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ItemDescriptor;
    use crate::options::ComboboxOptions;

    fn registry() -> ItemRegistry {
        ItemRegistry::new([
            ItemDescriptor::new("apple").label("Apple"),
            ItemDescriptor::new("apricot").label("Apricot"),
            ItemDescriptor::new("banana").label("Banana").disabled(),
            ItemDescriptor::new("cherry").label("Cherry"),
        ])
    }

    fn dispatch(
        state: &mut ComboboxState,
        registry: &ItemRegistry,
        action: ComboboxAction,
    ) -> Vec<ComboboxEffect> {
        reduce_combobox(state, registry, action)
    }

    fn search(text: &str) -> ComboboxAction {
        ComboboxAction::SetSearchText {
            text: text.to_string(),
        }
    }

    #[test]
    fn activation_toggles_and_auto_closes_by_default() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::PressTrigger);

        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::ActivateItem {
                key: "cherry".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![
                ComboboxEffect::ValueChange(vec!["cherry".to_string()]),
                ComboboxEffect::OpenChange(false),
            ]
        );
        assert!(!state.is_open());
        assert_eq!(state.overlay.last_close(), Some(CloseReason::AfterSelect));
    }

    #[test]
    fn auto_close_disabled_keeps_overlay_open() {
        let registry = registry();
        let mut state = ComboboxState::uncontrolled(
            ComboboxOptions::default().with_auto_close(false),
            ["apple"],
        );
        dispatch(&mut state, &registry, ComboboxAction::Open);
        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::ActivateItem {
                key: "apricot".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![ComboboxEffect::ValueChange(vec![
                "apple".to_string(),
                "apricot".to_string()
            ])]
        );
        assert!(state.is_open());
    }

    #[test]
    fn disabled_activation_is_silent() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);

        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::ActivateItem {
                key: "banana".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(state.value().is_empty());
        assert!(state.is_open());
    }

    #[test]
    fn hidden_items_cannot_be_activated() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, search("ap"));

        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::ActivateItem {
                key: "cherry".to_string(),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn opening_resets_search_and_focus() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, search("ch"));
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Next));
        assert_eq!(state.focus.index(), Some(0));
        dispatch(
            &mut state,
            &registry,
            ComboboxAction::Close {
                reason: CloseReason::Explicit,
            },
        );
        assert_eq!(state.search.text(), "ch");

        let effects = dispatch(&mut state, &registry, ComboboxAction::PressTrigger);
        assert_eq!(
            effects,
            vec![
                ComboboxEffect::SearchChange(String::new()),
                ComboboxEffect::OpenChange(true),
            ]
        );
        assert_eq!(state.search.text(), "");
        assert_eq!(state.focus.index(), None);
        assert_eq!(state.item_views(&registry, None).len(), 4);
    }

    #[test]
    fn close_notifies_once_regardless_of_caller() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);

        let first = dispatch(
            &mut state,
            &registry,
            ComboboxAction::Close {
                reason: CloseReason::OutsideInteraction,
            },
        );
        let second = dispatch(
            &mut state,
            &registry,
            ComboboxAction::Close {
                reason: CloseReason::Explicit,
            },
        );
        assert_eq!(first, vec![ComboboxEffect::OpenChange(false)]);
        assert!(second.is_empty());
    }

    #[test]
    fn dismissal_reason_is_recorded() {
        let registry = registry();
        let mut state = ComboboxState::default();
        for reason in [CloseReason::Escape, CloseReason::OutsideInteraction] {
            dispatch(&mut state, &registry, ComboboxAction::Open);
            dispatch(&mut state, &registry, ComboboxAction::Close { reason });
            assert_eq!(state.overlay.last_close(), Some(reason));
        }
    }

    #[test]
    fn trigger_press_toggles_open_state() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::PressTrigger);
        assert!(state.is_open());
        dispatch(&mut state, &registry, ComboboxAction::PressTrigger);
        assert!(!state.is_open());
        assert_eq!(state.overlay.last_close(), Some(CloseReason::TriggerToggle));
    }

    #[test]
    fn keyboard_activation_uses_the_pointer_path() {
        let registry = registry();
        let mut state = ComboboxState::uncontrolled(
            ComboboxOptions::default().with_auto_close(false),
            Vec::<String>::new(),
        );
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, search("ap"));
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Last));

        let effects = dispatch(&mut state, &registry, ComboboxAction::ActivateFocused);
        assert_eq!(
            effects,
            vec![ComboboxEffect::ValueChange(vec!["apricot".to_string()])]
        );

        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::First));
        dispatch(&mut state, &registry, search(""));
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Next));
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Next));
        let effects = dispatch(&mut state, &registry, ComboboxAction::ActivateFocused);
        assert!(effects.is_empty(), "focused disabled item must not toggle");
    }

    #[test]
    fn narrowing_search_reclamps_focus() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Last));
        assert_eq!(state.focus.index(), Some(3));

        dispatch(&mut state, &registry, search("ap"));
        assert_eq!(state.focus.index(), Some(1));

        dispatch(&mut state, &registry, search("zzz"));
        assert_eq!(state.focus.index(), None);
        let effects = dispatch(&mut state, &registry, ComboboxAction::ActivateFocused);
        assert!(effects.is_empty());
    }

    #[test]
    fn replaced_items_reclamp_focus() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, ComboboxAction::MoveFocus(FocusMove::Last));

        let shorter = ItemRegistry::new(registry.items().iter().take(2).cloned());
        dispatch(&mut state, &shorter, ComboboxAction::ItemsChanged);
        assert_eq!(state.focus.index(), Some(1));
    }

    #[test]
    fn repeated_search_text_is_not_renotified() {
        let registry = registry();
        let mut state = ComboboxState::default();
        assert_eq!(
            dispatch(&mut state, &registry, search("a")),
            vec![ComboboxEffect::SearchChange("a".to_string())]
        );
        assert!(dispatch(&mut state, &registry, search("a")).is_empty());
    }

    #[test]
    fn hover_moves_focus_to_visible_position() {
        let registry = registry();
        let mut state = ComboboxState::default();
        dispatch(&mut state, &registry, ComboboxAction::Open);
        dispatch(&mut state, &registry, search("c"));
        dispatch(
            &mut state,
            &registry,
            ComboboxAction::HoverItem {
                key: "cherry".to_string(),
            },
        );
        assert_eq!(state.focus.index(), Some(1));
    }

    #[test]
    fn controlled_toggle_proposes_without_mutating() {
        let registry = registry();
        let mut state = ComboboxState::controlled(ComboboxOptions::default(), ["apple"]);
        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::RemoveChip {
                key: "apple".to_string(),
            },
        );
        assert_eq!(effects, vec![ComboboxEffect::ValueChange(Vec::new())]);
        assert_eq!(state.value().to_vec(), vec!["apple".to_string()]);

        dispatch(
            &mut state,
            &registry,
            ComboboxAction::SyncValue { value: Vec::new() },
        );
        assert!(state.value().is_empty());
    }

    #[test]
    fn chip_removal_does_not_close_overlay() {
        let registry = registry();
        let mut state = ComboboxState::uncontrolled(ComboboxOptions::default(), ["apple"]);
        dispatch(&mut state, &registry, ComboboxAction::Open);
        let effects = dispatch(
            &mut state,
            &registry,
            ComboboxAction::RemoveChip {
                key: "apple".to_string(),
            },
        );
        assert_eq!(effects, vec![ComboboxEffect::ValueChange(Vec::new())]);
        assert!(state.is_open());
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            ComboboxAction::from_key("Escape"),
            Some(ComboboxAction::Close {
                reason: CloseReason::Escape
            })
        );
        assert_eq!(
            ComboboxAction::from_key("Enter"),
            Some(ComboboxAction::ActivateFocused)
        );
        assert_eq!(
            ComboboxAction::from_key("ArrowUp"),
            Some(ComboboxAction::MoveFocus(FocusMove::Previous))
        );
        assert_eq!(ComboboxAction::from_key("a"), None);
    }
}
