use std::rc::Rc;

use dioxus::prelude::*;
use time::Date;

use crate::core::{color::HeatPalette, format};
use crate::t;

use super::data::DayRecord;

/// Horizontal width reserved per day cell, in pixels.
pub const CELL_PITCH_PX: usize = 20;

/// Tooltip for one heatmap cell, e.g. `Mon Jan 01 2024 (2 events)`.
pub fn cell_title(day: &DayRecord) -> String {
    t!(
        "heatmap-cell-title",
        date = format::format_day(day.date),
        count = day.event_count()
    )
}

#[component]
pub fn HeatmapStrip(
    days: Rc<[Rc<DayRecord>]>,
    palette: HeatPalette,
    on_select: EventHandler<Date>,
) -> Element {
    let strip_width = days.len() * CELL_PITCH_PX;

    rsx! {
        section {
            class: "heatmap",
            aria_label: t!("heatmap-label"),
            div {
                class: "heatmap__strip",
                style: "width: {strip_width}px",
                for day in days.iter() {
                    HeatmapCell {
                        key: "{format::day_key(day.date)}",
                        day: Rc::clone(day),
                        palette,
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn HeatmapCell(day: Rc<DayRecord>, palette: HeatPalette, on_select: EventHandler<Date>) -> Element {
    let color = palette.color(day.intensity);
    let title = cell_title(&day);
    let date = day.date;

    rsx! {
        button {
            r#type: "button",
            class: "heatmap__cell",
            style: "background-color: {color}",
            title: "{title}",
            aria_label: "{title}",
            onclick: move |_| on_select.call(date),
        }
    }
}
