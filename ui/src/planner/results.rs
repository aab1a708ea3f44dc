use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::search::SearchHit;

/// Matching days and only their matching events. Callers hide this panel for
/// an empty query.
#[component]
pub fn SearchResults(hits: Vec<SearchHit>) -> Element {
    rsx! {
        section { class: "planner-card search-results",
            h2 { class: "planner-card__title", {t!("search-results-title")} }
            if hits.is_empty() {
                p { class: "search-results__empty", {t!("search-no-results")} }
            } else {
                ul { class: "search-results__days",
                    for hit in hits.iter() {
                        li { key: "{format::day_key(hit.date)}", class: "search-results__day",
                            strong { "{format::format_day(hit.date)}:" }
                            ul { class: "search-results__events",
                                for (idx, event) in hit.events.iter().enumerate() {
                                    li { key: "{idx}", "{event}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
