use dioxus::prelude::*;

use crate::t;

/// Generic dialog container: overlay, titled panel and close control.
///
/// Renders nothing unless `open` is set. Clicking the backdrop or pressing
/// Escape calls `on_close`; clicks inside the panel do not reach the backdrop.
#[component]
pub fn Modal(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    let close_label = t!("modal-close-label");

    rsx! {
        div {
            class: "modal__backdrop",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                if key == "escape" {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost modal__close",
                        aria_label: "{close_label}",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal__body", {children} }
            }
        }
    }
}
