//! Combobox and select widgets built on the headless [`combobox_core`] reducer.
//!
//! [`Combobox`] is the multi-select entry point and [`Select`] the single-select one. Both mount
//! the same reducer container: a trigger surface inside a [`Popover`], and an overlay holding
//! the optional search field and the item list. Whether the selection is controlled is decided
//! once, from whether a `value` signal was supplied when the widget was created.

use leptos::*;

use combobox_core::{
    CloseReason, ComboboxAction, ComboboxOptions, ComboboxState, ItemDescriptor, SelectMode,
    SelectionStore,
};

use crate::popover::{Popover, PopoverContent};
use crate::primitives::ButtonSize;

mod context;
mod effects;
mod keys;
mod list;
mod trigger;

pub use context::{use_combobox, ComboboxContext, ComboboxHandlers, ValueRenderer};
pub use list::{ComboboxItem, ComboboxList, ComboboxSearchInput};
pub use trigger::ComboboxTrigger;

struct ComboboxSetup {
    items: MaybeSignal<Vec<ItemDescriptor>>,
    options: ComboboxOptions,
    value: Option<Signal<Vec<String>>>,
    default_value: Vec<String>,
    open: Option<Signal<bool>>,
    value_renderer: Option<ValueRenderer>,
    handlers: ComboboxHandlers,
    layout_class: Option<&'static str>,
    aria_label: Option<String>,
    search_placeholder: Option<String>,
    empty_text: Option<String>,
}

#[component]
/// Searchable dropdown selecting any number of keys, shown as removable chips.
///
/// Supplying `value` makes the widget controlled: toggles are reported through
/// `on_value_change` and only take effect once the owner feeds the new value back.
pub fn Combobox(
    /// Candidate items in display order.
    #[prop(into)]
    items: MaybeSignal<Vec<ItemDescriptor>>,
    /// Behavior settings. `mode` defaults to multiple.
    #[prop(optional)]
    options: ComboboxOptions,
    /// Owner-held selection. Its presence makes the widget controlled.
    #[prop(optional, into)]
    value: Option<Signal<Vec<String>>>,
    /// Initial selection for an uncontrolled widget.
    #[prop(optional)]
    default_value: Vec<String>,
    /// Owner-held open flag; setting it to `false` closes the overlay.
    #[prop(optional, into)]
    open: Option<Signal<bool>>,
    /// Custom view for values in the list and on the trigger.
    #[prop(optional)]
    value_renderer: Option<ValueRenderer>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    mount_combobox(ComboboxSetup {
        items,
        options,
        value,
        default_value,
        open,
        value_renderer,
        handlers: ComboboxHandlers {
            on_value_change,
            on_open_change,
            on_search,
        },
        layout_class,
        aria_label,
        search_placeholder,
        empty_text,
    })
}

#[component]
/// Single-select dropdown. Picking another item replaces the current one.
pub fn Select(
    /// Candidate items in display order.
    #[prop(into)]
    items: MaybeSignal<Vec<ItemDescriptor>>,
    /// Behavior settings; the mode is always forced to single.
    #[prop(optional)]
    options: ComboboxOptions,
    /// Owner-held selection. Its presence makes the widget controlled.
    #[prop(optional, into)]
    value: Option<Signal<Option<String>>>,
    /// Initial selection for an uncontrolled widget.
    #[prop(optional, into)]
    default_value: Option<String>,
    #[prop(optional, into)] open: Option<Signal<bool>>,
    #[prop(optional)] value_renderer: Option<ValueRenderer>,
    #[prop(optional)] on_value_change: Option<Callback<Option<String>>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    let options = ComboboxOptions {
        mode: SelectMode::Single,
        ..options
    };
    let value = value.map(single_value);
    let on_value_change = on_value_change.map(single_value_handler);

    mount_combobox(ComboboxSetup {
        items,
        options,
        value,
        default_value: default_value.into_iter().collect(),
        open,
        value_renderer,
        handlers: ComboboxHandlers {
            on_value_change,
            on_open_change,
            on_search,
        },
        layout_class,
        aria_label,
        search_placeholder,
        empty_text,
    })
}

fn mount_combobox(setup: ComboboxSetup) -> impl IntoView {
    let ComboboxSetup {
        items,
        options,
        value,
        default_value,
        open,
        value_renderer,
        handlers,
        layout_class,
        aria_label,
        search_placeholder,
        empty_text,
    } = setup;

    let searchable = options.searchable;
    let search_placeholder = search_placeholder.unwrap_or_else(|| "Search".to_string());
    let empty_text = empty_text.unwrap_or_else(|| "No results".to_string());
    let size = ButtonSize::from(options.size);
    if value.is_some() && handlers.on_value_change.is_none() {
        logging::debug_warn!("controlled combobox without on_value_change never changes selection");
    }
    let initial = initial_state(options, value.map(|value| value.get_untracked()), default_value);
    let combobox = context::provide_combobox(initial, items, handlers, value_renderer);
    bind_owner_props(combobox, value, open);

    view! {
        <Popover
            open=combobox.is_open
            on_dismiss=Callback::new(move |reason| {
                combobox.dispatch_action(ComboboxAction::Close { reason });
            })
            layout_class=layout_class.unwrap_or("")
        >
            <ComboboxTrigger aria_label=aria_label.clone().unwrap_or_default() />
            <PopoverContent
                role="dialog"
                aria_label=aria_label.unwrap_or_default()
                size=size
                on_keydown=Callback::new(move |ev| keys::handle_overlay_key(combobox, ev))
            >
                {searchable.then(|| view! { <ComboboxSearchInput placeholder=search_placeholder /> })}
                <ComboboxList empty_text=empty_text />
            </PopoverContent>
        </Popover>
    }
}

/// Feeds owner-held `value` and `open` props into the reducer whenever they change.
fn bind_owner_props(
    combobox: ComboboxContext,
    value: Option<Signal<Vec<String>>>,
    open: Option<Signal<bool>>,
) {
    if let Some(value) = value {
        create_effect(move |_| {
            let value = value.get();
            combobox.dispatch_action(ComboboxAction::SyncValue { value });
        });
    }
    if let Some(open) = open {
        create_effect(move |_| {
            let action = if open.get() {
                ComboboxAction::Open
            } else {
                ComboboxAction::Close {
                    reason: CloseReason::Explicit,
                }
            };
            combobox.dispatch_action(action);
        });
    }
}

fn single_value(value: Signal<Option<String>>) -> Signal<Vec<String>> {
    Signal::derive(move || value.get().into_iter().collect())
}

fn single_value_handler(on_value_change: Callback<Option<String>>) -> Callback<Vec<String>> {
    Callback::new(move |next: Vec<String>| on_value_change.call(next.into_iter().next()))
}

fn initial_state(
    options: ComboboxOptions,
    controlled: Option<Vec<String>>,
    default_value: Vec<String>,
) -> ComboboxState {
    let mode = options.mode;
    let selection = match controlled {
        Some(value) => SelectionStore::try_controlled(mode, value.clone()).unwrap_or_else(|err| {
            logging::warn!("combobox value: {err}; keeping the first key");
            SelectionStore::controlled(mode, value)
        }),
        None => SelectionStore::try_uncontrolled(mode, default_value.clone()).unwrap_or_else(
            |err| {
                logging::warn!("combobox default value: {err}; keeping the first key");
                SelectionStore::uncontrolled(mode, default_value)
            },
        ),
    };
    ComboboxState {
        selection,
        ..ComboboxState::uncontrolled(options, Vec::<String>::new())
    }
}

#[cfg(test)]
mod tests {
    use combobox_core::{Chip, TriggerContent};
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<ItemDescriptor> {
        vec![
            ItemDescriptor::new("option1").label("Option 1"),
            ItemDescriptor::new("option2").label("Option 2"),
            ItemDescriptor::new("option3").label("Option 3"),
        ]
    }

    fn trigger(combobox: ComboboxContext) -> TriggerContent {
        combobox.registry.with_untracked(|registry| {
            combobox
                .state
                .with_untracked(|state| state.trigger_content(registry, None))
        })
    }

    #[test]
    fn default_value_shows_chips_instead_of_placeholder() {
        let runtime = create_runtime();
        let state = initial_state(
            ComboboxOptions::default().with_placeholder("Pick"),
            None,
            vec!["option1".to_string(), "option3".to_string()],
        );
        let combobox = context::provide_combobox(
            state,
            items().into(),
            ComboboxHandlers::default(),
            None,
        );

        let content = trigger(combobox);
        assert!(!content.is_placeholder());
        assert_eq!(
            content,
            TriggerContent::Chips(vec![
                Chip {
                    key: "option1".to_string(),
                    label: "Option 1".to_string(),
                },
                Chip {
                    key: "option3".to_string(),
                    label: "Option 3".to_string(),
                },
            ])
        );
        runtime.dispose();
    }

    #[test]
    fn controlled_single_value_follows_owner() {
        let runtime = create_runtime();
        let state = initial_state(
            ComboboxOptions::single(),
            Some(vec!["option1".to_string()]),
            Vec::new(),
        );
        assert!(state.selection.is_controlled());
        let combobox = context::provide_combobox(
            state,
            items().into(),
            ComboboxHandlers::default(),
            None,
        );
        assert_eq!(trigger(combobox).text(), "Option 1");

        combobox.dispatch_action(ComboboxAction::SyncValue {
            value: vec!["option3".to_string()],
        });
        assert_eq!(trigger(combobox).text(), "Option 3");
        runtime.dispose();
    }

    #[test]
    fn single_mode_keeps_first_of_several_initial_keys() {
        let state = initial_state(
            ComboboxOptions::single(),
            None,
            vec!["option2".to_string(), "option3".to_string()],
        );
        assert_eq!(state.value().to_vec(), vec!["option2"]);
        assert!(!state.selection.is_controlled());
    }

    #[test]
    fn owner_feedback_advances_controlled_selection() {
        let runtime = create_runtime();
        let owner = create_rw_signal(vec!["option1".to_string()]);
        let handlers = ComboboxHandlers {
            on_value_change: Some(Callback::new(move |next| owner.set(next))),
            ..ComboboxHandlers::default()
        };
        let state = initial_state(
            ComboboxOptions::multiple().with_auto_close(false),
            Some(owner.get_untracked()),
            Vec::new(),
        );
        let combobox = context::provide_combobox(state, items().into(), handlers, None);
        bind_owner_props(combobox, Some(owner.into()), None);

        combobox.open();
        combobox.dispatch_action(ComboboxAction::ActivateItem {
            key: "option2".to_string(),
        });

        assert_eq!(owner.get_untracked(), vec!["option1", "option2"]);
        assert_eq!(
            combobox.state.get_untracked().value().to_vec(),
            vec!["option1", "option2"]
        );
        runtime.dispose();
    }

    #[test]
    fn ignored_proposal_leaves_controlled_selection() {
        let runtime = create_runtime();
        let owner = create_rw_signal(vec!["option1".to_string()]);
        let proposals = create_rw_signal(Vec::<Vec<String>>::new());
        let handlers = ComboboxHandlers {
            on_value_change: Some(Callback::new(move |next| {
                proposals.update(|proposals| proposals.push(next));
            })),
            ..ComboboxHandlers::default()
        };
        let state = initial_state(
            ComboboxOptions::multiple(),
            Some(owner.get_untracked()),
            Vec::new(),
        );
        let combobox = context::provide_combobox(state, items().into(), handlers, None);
        bind_owner_props(combobox, Some(owner.into()), None);

        combobox.dispatch_action(ComboboxAction::Toggle {
            key: "option3".to_string(),
        });

        assert_eq!(
            proposals.get_untracked(),
            vec![vec!["option1".to_string(), "option3".to_string()]]
        );
        assert_eq!(combobox.state.get_untracked().value().to_vec(), vec!["option1"]);
        assert_eq!(trigger(combobox).text(), "Option 1");
        runtime.dispose();
    }

    #[test]
    fn select_adapters_round_trip_single_value() {
        let runtime = create_runtime();
        let owner = create_rw_signal(Some("option1".to_string()));
        let handlers = ComboboxHandlers {
            on_value_change: Some(single_value_handler(Callback::new(move |next| {
                owner.set(next)
            }))),
            ..ComboboxHandlers::default()
        };
        let state = initial_state(
            ComboboxOptions::single(),
            owner.get_untracked().map(|key| vec![key]),
            Vec::new(),
        );
        let combobox = context::provide_combobox(state, items().into(), handlers, None);
        bind_owner_props(combobox, Some(single_value(owner.into())), None);

        combobox.open();
        combobox.dispatch_action(ComboboxAction::ActivateItem {
            key: "option3".to_string(),
        });
        assert_eq!(owner.get_untracked(), Some("option3".to_string()));
        assert_eq!(trigger(combobox).text(), "Option 3");

        combobox.open();
        combobox.dispatch_action(ComboboxAction::ActivateItem {
            key: "option3".to_string(),
        });
        assert_eq!(owner.get_untracked(), None);
        assert!(trigger(combobox).is_placeholder());
        runtime.dispose();
    }

    #[test]
    fn open_prop_closes_with_explicit_reason() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        let combobox = context::provide_combobox(
            ComboboxState::default(),
            items().into(),
            ComboboxHandlers::default(),
            None,
        );
        bind_owner_props(combobox, None, Some(open.into()));
        assert!(combobox.is_open.get_untracked());

        open.set(false);
        let state = combobox.state.get_untracked();
        assert!(!state.is_open());
        assert_eq!(state.overlay.last_close(), Some(CloseReason::Explicit));
        runtime.dispose();
    }
}
