use leptos::ev::MouseEvent;
use leptos::*;

use combobox_core::{Chip, ComboboxAction, OutputSlot, RenderLocation, TriggerContent};

use super::context::{use_combobox, ComboboxContext};
use super::keys;
use crate::primitives::{bool_token, merge_layout_class, Badge, ButtonSize, TextTone};
use crate::{Icon, IconName, IconSize};

#[component]
/// Always-visible control showing the placeholder, the selected chips, or the summary badge.
///
/// The trigger owns the output slot the combobox publishes its display content into; dropping
/// the trigger detaches the slot.
pub fn ComboboxTrigger(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let combobox = use_combobox();
    let slot = store_value(OutputSlot::<TriggerContent>::new());
    let published = create_trigger();
    slot.with_value(|slot| combobox.register_trigger(slot, published));
    let content = create_memo(move |_| {
        published.track();
        slot.with_value(OutputSlot::current).unwrap_or(TriggerContent::Placeholder(None))
    });
    let size = combobox
        .state
        .with_untracked(|state| ButtonSize::from(state.options.size));
    let is_open = combobox.is_open;

    view! {
        <div
            class=merge_layout_class("ui-combobox-trigger", layout_class)
            role="combobox"
            tabindex=0
            aria-label=aria_label
            aria-haspopup="listbox"
            aria-expanded=move || bool_token(is_open.get())
            aria-controls=combobox.listbox_id()
            aria-activedescendant=move || combobox.active_option_id()
            data-ui-primitive="true"
            data-ui-kind="combobox-trigger"
            data-ui-size=size.token()
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
            data-ui-placeholder=move || bool_token(content.with(TriggerContent::is_placeholder))
            on:click=move |_| combobox.dispatch_action(ComboboxAction::PressTrigger)
            on:keydown=move |ev| keys::handle_trigger_key(combobox, ev)
        >
            <span class="ui-combobox-value" data-ui-slot="trigger-value">
                {move || render_content(combobox, content.get())}
            </span>
            <Icon icon=IconName::ChevronDown size=IconSize::Sm />
        </div>
    }
}

fn render_content(combobox: ComboboxContext, content: TriggerContent) -> View {
    match content {
        TriggerContent::Placeholder(text) => view! {
            <span data-ui-slot="placeholder">{text.unwrap_or_default()}</span>
        }
        .into_view(),
        TriggerContent::Value(Chip { key, label }) => view! {
            <span data-ui-slot="value">
                {combobox.render_value(key, label, RenderLocation::Trigger)}
            </span>
        }
        .into_view(),
        TriggerContent::Chips(chips) => chips
            .into_iter()
            .map(|chip| view! { <ComboboxChip chip /> })
            .collect_view(),
        TriggerContent::Summary(text) => view! {
            <Badge tone=TextTone::Accent ui_slot="summary">{text}</Badge>
        }
        .into_view(),
    }
}

#[component]
/// One removable chip on the trigger.
fn ComboboxChip(chip: Chip) -> impl IntoView {
    let combobox = use_combobox();
    let Chip { key, label } = chip;
    let dismiss_label = format!("Remove {label}");
    let remove_key = key.clone();
    let rendered = combobox.render_value(key, label, RenderLocation::Trigger);

    // Chip clicks must not reach the trigger's open/close toggle.
    view! {
        <span class="ui-combobox-chip" on:click=|ev: MouseEvent| ev.stop_propagation()>
            <Badge
                ui_slot="chip"
                dismiss_label=dismiss_label
                on_dismiss=Callback::new(move |ev: MouseEvent| {
                    ev.stop_propagation();
                    combobox.dispatch_action(ComboboxAction::RemoveChip {
                        key: remove_key.clone(),
                    });
                })
            >
                {rendered}
            </Badge>
        </span>
    }
}
