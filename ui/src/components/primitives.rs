use dioxus::prelude::*;

use spares_common::badge::Badge;
use spares_common::customer::initials;
use spares_common::toast::{ToastKind, ToastQueue};

#[component]
pub fn StatusBadge(badge: Badge) -> Element {
    let class = badge.variant.class();
    rsx! {
        span { class: "{class}", "{badge.label}" }
    }
}

/// Round avatar showing the name's initials.
#[component]
pub fn Avatar(name: String) -> Element {
    let letters = initials(&name);
    rsx! {
        span { class: "avatar", title: "{name}", "{letters}" }
    }
}

/// Modal asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "dialog-backdrop",
            onclick: move |_| on_cancel.call(()),
            div { class: "dialog",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { "{title}" }
                p { "{message}" }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-destructive",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

/// Stack of toasts in the corner of the screen; click to dismiss.
#[component]
pub fn ToastHost() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let toasts: Vec<_> = queue.read().iter().cloned().collect();

    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                        ToastKind::Info => "toast toast-info",
                    };
                    let id = toast.id;
                    rsx! {
                        div { class: "{class}",
                            key: "{id}",
                            onclick: move |_| queue.write().dismiss(id),
                            "{toast.text}"
                        }
                    }
                }
            }
        }
    }
}
