use dioxus::prelude::*;

use crate::planner::PlannerView;

/// Single page of the app. Language changes are handled inside the planner.
#[component]
pub fn Planner() -> Element {
    rsx! {
        PlannerView {}
    }
}
