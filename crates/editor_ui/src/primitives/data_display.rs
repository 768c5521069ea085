use super::*;

#[component]
/// Compact badge primitive. Renders a removal affordance when `on_dismiss` is set.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] dismiss_label: MaybeSignal<String>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
            data-ui-dismissible=bool_token(on_dismiss.is_some())
        >
            <span data-ui-slot="badge-label">{children()}</span>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <IconButton
                        icon=IconName::Dismiss
                        size=ButtonSize::Sm
                        ui_slot="badge-dismiss"
                        aria_label=dismiss_label
                        on_click=on_dismiss
                    />
                }
            })}
        </span>
    }
}

#[component]
/// Scrollable list container.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_multiselectable: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-surface", layout_class)
            id=id
            role=role
            aria-multiselectable=move || bool_token(aria_multiselectable.get())
            data-ui-primitive="true"
            data-ui-kind="list-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Empty state line shown when a list has nothing to render.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="presentation"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
