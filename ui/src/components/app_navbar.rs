use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Application header: brand, page title, caller-supplied actions and the
/// locale switcher.
///
/// `children` is rendered in the actions slot (the planner puts its theme
/// toggle and search box there).
///
/// The language selector updates a local signal and, when the platform
/// provides one through context, the global `Signal<String>` language code so
/// the rest of the tree re-renders with fresh strings.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Starts from the shared code: the navbar remounts when the language changes.
    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .map(|code| (*code.peek()).clone())
            .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string())
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, %err, "language switch failed"),
        }
    };

    let title = t!("app-title");
    let tagline = t!("app-tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    h1 { class: "navbar__brand-mark", "{title}" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                div { class: "navbar__actions", {children} }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
