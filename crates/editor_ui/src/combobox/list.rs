use leptos::ev::MouseEvent;
use leptos::*;

use combobox_core::{ComboboxAction, ItemView, RenderLocation};

use super::context::use_combobox;
use crate::primitives::{EmptyState, FieldVariant, IconButton, ListSurface, MenuItem, TextField};
use crate::{Icon, IconName, IconSize};

#[component]
/// Search field rendered at the top of the overlay.
pub fn ComboboxSearchInput(#[prop(optional, into)] placeholder: Option<String>) -> impl IntoView {
    let combobox = use_combobox();
    let input = create_node_ref::<html::Input>();
    let text = create_memo(move |_| combobox.state.with(|state| state.search.text().to_string()));

    create_effect(move |_| {
        if !combobox.is_open.get() {
            return;
        }
        if let Some(input) = input.get_untracked() {
            focus_after_render(&input);
        }
    });

    let set_text = move |text: String| combobox.dispatch_action(ComboboxAction::SetSearchText { text });

    view! {
        <div class="ui-combobox-search" data-ui-slot="search">
            <Icon icon=IconName::Search size=IconSize::Sm />
            <TextField
                variant=FieldVariant::Inset
                node_ref=input
                ui_slot="search-input"
                placeholder=placeholder.unwrap_or_else(|| "Search".to_string())
                aria_label="Search options"
                aria_controls=combobox.listbox_id()
                aria_activedescendant=Signal::derive(move || combobox.active_option_id())
                value=text
                on_input=Callback::new(move |ev| set_text(event_target_value(&ev)))
            />
            <Show when=move || !text.with(String::is_empty)>
                <IconButton
                    icon=IconName::Dismiss
                    ui_slot="search-clear"
                    aria_label="Clear search"
                    on_click=Callback::new(move |_| set_text(String::new()))
                />
            </Show>
        </div>
    }
}

#[component]
/// Visible items in declaration order, or an empty-state line.
pub fn ComboboxList(#[prop(optional, into)] empty_text: Option<String>) -> impl IntoView {
    let combobox = use_combobox();
    let items = create_memo(move |_| {
        combobox
            .registry
            .with(|registry| combobox.state.with(|state| state.item_views(registry, None)))
    });
    let multiple = Signal::derive(move || {
        combobox
            .state
            .with(|state| state.selection.mode().is_multiple())
    });
    let empty_text = store_value(empty_text.unwrap_or_else(|| "No results".to_string()));

    view! {
        <ListSurface
            id=combobox.listbox_id()
            role="listbox"
            aria_multiselectable=multiple
        >
            <For
                each=move || items.get()
                key=|item| {
                    (item.key.clone(), item.index, item.selected, item.focused, item.disabled)
                }
                children=move |item| view! { <ComboboxItem item /> }
            />
            {move || {
                items
                    .with(Vec::is_empty)
                    .then(|| view! { <EmptyState>{empty_text.get_value()}</EmptyState> })
            }}
        </ListSurface>
    }
}

#[component]
/// One option row. Pointer activation and hover go through the reducer like keyboard input.
pub fn ComboboxItem(item: ItemView) -> impl IntoView {
    let combobox = use_combobox();
    let ItemView {
        key,
        index,
        label,
        selected,
        focused,
        disabled,
    } = item;
    let activate_key = key.clone();
    let hover_key = key.clone();
    let rendered = combobox.render_value(key, label, RenderLocation::Item);

    view! {
        <MenuItem
            id=combobox.option_id(index)
            role="option"
            selected=selected
            focused=focused
            disabled=disabled
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.prevent_default();
                combobox.dispatch_action(ComboboxAction::ActivateItem {
                    key: activate_key.clone(),
                });
            })
            on_mouseenter=Callback::new(move |_| {
                combobox.dispatch_action(ComboboxAction::HoverItem {
                    key: hover_key.clone(),
                });
            })
        >
            <span data-ui-slot="item-label">{rendered}</span>
            {selected.then(|| view! { <Icon icon=IconName::Checkmark size=IconSize::Xs /> })}
        </MenuItem>
    }
}

// The overlay unhides in the same flush that opens it, so focus waits for the next task.
fn focus_after_render(element: &web_sys::HtmlElement) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let element = element.clone();
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = element;
}
