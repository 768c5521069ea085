//! Overlay collaborator: open-state plumbing, outside-interaction and Escape reporting.
//!
//! The popover never decides on its own whether it is open. It renders whatever `open` says and
//! reports dismiss requests through `on_dismiss`, tagged with what caused them. Positioning is
//! left to CSS.

use leptos::*;
use wasm_bindgen::JsCast;

use combobox_core::CloseReason;

use crate::primitives::{merge_layout_class, ButtonSize, MenuSurface};

#[derive(Clone, Copy)]
/// Open state shared between a [`Popover`] and its [`PopoverContent`].
pub struct PopoverContext {
    /// Authoritative open flag supplied by the owner.
    pub open: Signal<bool>,
    on_dismiss: Callback<CloseReason>,
}

impl PopoverContext {
    /// Asks the owner to close the popover.
    pub fn request_close(&self, reason: CloseReason) {
        self.on_dismiss.call(reason);
    }
}

#[component]
/// Anchors a trigger and its floating content, and reports dismiss requests.
pub fn Popover(
    /// Owner-held open flag.
    #[prop(into)]
    open: Signal<bool>,
    /// Receives [`CloseReason::OutsideInteraction`] or [`CloseReason::Escape`] while open.
    on_dismiss: Callback<CloseReason>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let root = create_node_ref::<html::Div>();
    let context = PopoverContext {
        open,
        on_dismiss,
    };
    provide_context(context);

    let outside_listener = window_event_listener(ev::pointerdown, move |ev| {
        if !open.get_untracked() || event_within(root, &ev) {
            return;
        }
        context.request_close(CloseReason::OutsideInteraction);
    });
    on_cleanup(move || outside_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" || !open.get_untracked() {
            return;
        }
        ev.prevent_default();
        context.request_close(CloseReason::Escape);
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class=merge_layout_class("ui-popover", layout_class)
            node_ref=root
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            {children()}
        </div>
    }
}

#[component]
/// Floating content mount point. Stays mounted and is hidden while closed.
pub fn PopoverContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] on_keydown: Option<Callback<ev::KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let popover = use_context::<PopoverContext>();
    if popover.is_none() {
        logging::warn!("PopoverContent rendered outside Popover; content stays hidden");
    }
    let hidden = Signal::derive(move || popover.map_or(true, |popover| !popover.open.get()));

    view! {
        <MenuSurface
            layout_class=layout_class.unwrap_or("")
            ui_slot="popover-content"
            role=role.unwrap_or_else(|| "dialog".to_string())
            aria_label=aria_label.unwrap_or_default()
            size=size
            hidden=hidden
            on_keydown=Callback::new(move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            })
        >
            {children()}
        </MenuSurface>
    }
}

fn event_within(root: NodeRef<html::Div>, ev: &web_sys::PointerEvent) -> bool {
    let Some(root) = root.get_untracked() else {
        return false;
    };
    let target = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    root.contains(target.as_ref())
}
