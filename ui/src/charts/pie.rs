use dioxus::prelude::*;

use crate::core::format;
use crate::planner::data::CategoryShare;

use super::geometry::{pie_slices, PieLayout, PlotArea};

/// Pie chart of category shares, each wedge labelled with its value.
#[component]
pub fn PieChart(shares: Vec<CategoryShare>, fill: &'static str) -> Element {
    let layout = PieLayout::default();
    let slices = pie_slices(&shares, layout);
    let view_box = PlotArea::default().view_box();

    rsx! {
        svg {
            class: "chart chart--pie",
            view_box: "{view_box}",
            width: "100%",
            height: "200",
            role: "img",

            for slice in slices.iter() {
                g { key: "{slice.name}", class: "chart__slice",
                    path {
                        d: "{slice.path}",
                        fill: fill,
                        stroke: "#ffffff",
                        stroke_width: "1",
                        title { "{slice.name}: {format::format_number(slice.value, 0)}" }
                    }
                    text {
                        class: "chart__slice-label",
                        x: "{slice.label_x}",
                        y: "{slice.label_y}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        fill: fill,
                        "{format::format_number(slice.value, 0)}"
                    }
                }
            }
        }
    }
}
