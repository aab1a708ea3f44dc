use dioxus::prelude::*;

use crate::core::format;
use crate::planner::data::MonthlyPoint;

use super::geometry::{line_geometry, PlotArea};

/// Monthly line chart with axis ticks and per-point tooltips.
#[component]
pub fn LineChart(points: Vec<MonthlyPoint>, stroke: &'static str, series: &'static str) -> Element {
    let area = PlotArea::default();
    let geometry = line_geometry(&points, area);
    let polyline = geometry.polyline();
    let view_box = area.view_box();
    let (left, right, bottom) = (area.left(), area.right(), area.bottom());
    let x_label_y = bottom + 18.0;
    let y_label_x = left - 6.0;

    rsx! {
        svg {
            class: "chart chart--line",
            view_box: "{view_box}",
            width: "100%",
            height: "200",
            role: "img",

            g { class: "chart__axis chart__axis--y",
                for tick in geometry.y_ticks.iter() {
                    line {
                        class: "chart__grid",
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{tick.position}",
                        y2: "{tick.position}",
                    }
                    text {
                        class: "chart__tick",
                        x: "{y_label_x}",
                        y: "{tick.position}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        "{tick.label}"
                    }
                }
            }

            g { class: "chart__axis chart__axis--x",
                line {
                    class: "chart__baseline",
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{bottom}",
                    y2: "{bottom}",
                }
                for tick in geometry.x_ticks.iter() {
                    text {
                        class: "chart__tick",
                        x: "{tick.position}",
                        y: "{x_label_y}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }
            }

            polyline {
                class: "chart__series",
                points: "{polyline}",
                fill: "none",
                stroke: stroke,
                stroke_width: "2",
            }

            for point in geometry.points.iter() {
                circle {
                    key: "{point.month}",
                    class: "chart__point",
                    cx: "{point.x}",
                    cy: "{point.y}",
                    r: "3",
                    fill: stroke,
                    title { "{series} · {point.month}: {format::format_number(point.value, 1)}" }
                }
            }
        }
    }
}
