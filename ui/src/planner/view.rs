use dioxus::prelude::*;
use time::Date;
use tracing::warn;

use crate::charts::AnalyticsPanels;
use crate::components::{AppNavbar, Modal};
use crate::core::{format, PlannerConfig};
use crate::t;

use super::editor::DayEditor;
use super::heatmap::HeatmapStrip;
use super::results::SearchResults;
use super::state::PlannerState;

/// Swap in the next snapshot. The read guard is released before the write.
fn apply(mut state: Signal<PlannerState>, transition: impl FnOnce(&PlannerState) -> PlannerState) {
    let next = transition(&state.read());
    state.set(next);
}

fn initial_state(config: &PlannerConfig) -> PlannerState {
    PlannerState::new(config).unwrap_or_else(|err| {
        warn!(%err, "invalid planner config; using defaults");
        PlannerState::generate(&PlannerConfig::default(), &mut rand::thread_rng())
    })
}

/// The whole planner: header controls, heatmap, analytics, day modal and
/// search results. Owns the session state for as long as it is mounted.
///
/// The body is keyed on the language code from context. A locale switch
/// remounts it so every translated string is rebuilt, while the session signal
/// stays here and survives the switch.
#[component]
pub fn PlannerView() -> Element {
    let config = try_use_context::<PlannerConfig>().unwrap_or_default();
    let state = use_signal(move || initial_state(&config));
    let lang = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();

    rsx! {
        for lang in std::iter::once(lang) {
            PlannerBody { key: "{lang}", state }
        }
    }
}

#[component]
fn PlannerBody(state: Signal<PlannerState>) -> Element {
    let on_select = move |date: Date| {
        let outcome = state.read().select_day(date);
        match outcome {
            Ok(next) => {
                let mut state = state;
                state.set(next);
            }
            Err(err) => warn!(%err, "ignoring heatmap selection"),
        }
    };

    let snapshot = state();
    let theme_class = if snapshot.dark_mode {
        "planner planner--dark"
    } else {
        "planner planner--light"
    };
    let (theme_glyph, theme_label) = if snapshot.dark_mode {
        ("☀", t!("theme-toggle-light"))
    } else {
        ("☾", t!("theme-toggle-dark"))
    };
    let search_placeholder = t!("search-placeholder");
    let search_label = t!("search-label");
    let selected = snapshot.selected_day().cloned();
    let hits = snapshot.search_active().then(|| snapshot.search_results());

    rsx! {
        div { class: "{theme_class}",
            AppNavbar {
                button {
                    r#type: "button",
                    class: "button button--ghost planner__theme-toggle",
                    title: "{theme_label}",
                    aria_label: "{theme_label}",
                    onclick: move |_| apply(state, PlannerState::toggle_theme),
                    "{theme_glyph}"
                }
                div { class: "planner__search",
                    span { class: "planner__search-icon", aria_hidden: "true", "⌕" }
                    input {
                        r#type: "text",
                        class: "planner__search-input",
                        placeholder: "{search_placeholder}",
                        aria_label: "{search_label}",
                        value: "{snapshot.search}",
                        oninput: move |evt| apply(state, |s| s.set_search(evt.value())),
                    }
                }
            }

            main { class: "page planner__content",
                HeatmapStrip {
                    days: snapshot.days.clone(),
                    palette: snapshot.palette,
                    on_select,
                }

                AnalyticsPanels { analytics: snapshot.analytics.clone() }

                if let Some(day) = selected {
                    Modal {
                        open: snapshot.modal.is_open(),
                        title: format::format_day(day.date),
                        on_close: move |_| apply(state, PlannerState::close_modal),
                        DayEditor {
                            day: day.clone(),
                            draft: snapshot.draft.clone(),
                            on_draft: move |text: String| apply(state, |s| s.set_draft(text)),
                            on_submit: move |_| apply(state, PlannerState::submit_draft),
                        }
                    }
                }

                if let Some(hits) = hits {
                    SearchResults { hits }
                }
            }
        }
    }
}
