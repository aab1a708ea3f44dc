use std::rc::Rc;

use dioxus::prelude::*;

use crate::t;

use super::data::DayRecord;

/// Body of the day modal: the day's events and the draft input.
#[component]
pub fn DayEditor(
    day: Rc<DayRecord>,
    draft: String,
    on_draft: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let placeholder = t!("modal-input-placeholder");
    let add_label = t!("modal-add-label");

    rsx! {
        div { class: "day-editor",
            h3 { class: "day-editor__heading", {t!("modal-events-heading")} }
            if day.events.is_empty() {
                p { class: "day-editor__empty", {t!("modal-no-events")} }
            } else {
                ul { class: "day-editor__events",
                    for (idx, event) in day.events.iter().enumerate() {
                        li { key: "{idx}", class: "day-editor__event", "{event}" }
                    }
                }
            }

            div { class: "day-editor__form",
                input {
                    r#type: "text",
                    class: "day-editor__input",
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    autofocus: true,
                    oninput: move |evt| on_draft.call(evt.value()),
                    onkeydown: move |evt| {
                        let key = evt.key().to_string().to_lowercase();
                        if key == "enter" {
                            evt.prevent_default();
                            on_submit.call(());
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "button button--primary day-editor__submit",
                    aria_label: "{add_label}",
                    onclick: move |_| on_submit.call(()),
                    "+"
                }
            }
        }
    }
}
