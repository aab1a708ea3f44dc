use std::rc::Rc;

use dioxus::prelude::*;

use crate::planner::data::ChartDatasets;
use crate::t;

use super::{LineChart, PieChart};

const COMPLETION_STROKE: &str = "#8884d8";
const CATEGORY_FILL: &str = "#8884d8";
const PRODUCTIVITY_STROKE: &str = "#82ca9d";

/// The three read-only analytics cards, side by side and wrapping on narrow screens.
#[component]
pub fn AnalyticsPanels(analytics: Rc<ChartDatasets>) -> Element {
    rsx! {
        section { class: "planner-analytics",
            article { class: "planner-card chart-panel",
                h2 { class: "planner-card__title", {t!("chart-completion-title")} }
                LineChart {
                    points: analytics.task_completion.clone(),
                    stroke: COMPLETION_STROKE,
                    series: "rate",
                }
            }
            article { class: "planner-card chart-panel",
                h2 { class: "planner-card__title", {t!("chart-category-title")} }
                PieChart {
                    shares: analytics.category_breakdown.clone(),
                    fill: CATEGORY_FILL,
                }
            }
            article { class: "planner-card chart-panel",
                h2 { class: "planner-card__title", {t!("chart-productivity-title")} }
                LineChart {
                    points: analytics.productivity_trend.clone(),
                    stroke: PRODUCTIVITY_STROKE,
                    series: "productivity",
                }
            }
        }
    }
}
