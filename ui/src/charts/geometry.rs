//! Pure chart geometry: maps datasets into SVG coordinates.
//!
//! Components in `line.rs` and `pie.rs` only turn these numbers into markup,
//! so everything that can be wrong about a chart is testable here.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::planner::data::{CategoryShare, MonthlyPoint};

/// SVG viewport plus the margins reserved for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            margin_left: 36.0,
            margin_right: 12.0,
            margin_top: 12.0,
            margin_bottom: 28.0,
        }
    }
}

impl PlotArea {
    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel position along the tick's axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub month: u8,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub area: PlotArea,
    pub points: Vec<PlotPoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub y_max: f64,
}

impl LineGeometry {
    /// `points` attribute for an SVG `<polyline>`.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const Y_DIVISIONS: usize = 4;

/// Smallest "round" number (1, 2, ... 10 times a power of ten) at or above `max`.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    (max / magnitude).ceil() * magnitude
}

pub fn line_geometry(data: &[MonthlyPoint], area: PlotArea) -> LineGeometry {
    let observed_max = data
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = nice_ceiling(observed_max);

    let plot_width = area.right() - area.left();
    let plot_height = area.bottom() - area.top();
    let x_for = |idx: usize| {
        if data.len() <= 1 {
            area.left() + plot_width / 2.0
        } else {
            area.left() + plot_width * idx as f64 / (data.len() - 1) as f64
        }
    };
    let y_for = |value: f64| {
        let ratio = (value / y_max).clamp(0.0, 1.0);
        area.bottom() - plot_height * ratio
    };

    let points = data
        .iter()
        .enumerate()
        .map(|(idx, p)| PlotPoint {
            x: x_for(idx),
            y: y_for(p.value),
            month: p.month,
            value: p.value,
        })
        .collect();

    let x_ticks = data
        .iter()
        .enumerate()
        .map(|(idx, p)| Tick {
            position: x_for(idx),
            label: p.month.to_string(),
        })
        .collect();

    let y_ticks = (0..=Y_DIVISIONS)
        .map(|step| {
            let value = y_max * step as f64 / Y_DIVISIONS as f64;
            Tick {
                position: y_for(value),
                label: format!("{value:.0}"),
            }
        })
        .collect();

    LineGeometry {
        area,
        points,
        x_ticks,
        y_ticks,
        y_max,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
    /// Angles in radians, clockwise from twelve o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path `d` for the wedge.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Label distance from the centre as a multiple of `radius`.
    pub label_offset: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            cx: 160.0,
            cy: 100.0,
            radius: 70.0,
            label_offset: 1.2,
        }
    }
}

fn polar(layout: &PieLayout, radius: f64, angle: f64) -> (f64, f64) {
    // Angle 0 points up; subtract a quarter turn to go from SVG's x-axis origin.
    let theta = angle - FRAC_PI_2;
    (
        layout.cx + radius * theta.cos(),
        layout.cy + radius * theta.sin(),
    )
}

fn wedge_path(layout: &PieLayout, start: f64, end: f64) -> String {
    let r = layout.radius;
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself; draw the disc as two half arcs.
        let (tx, ty) = polar(layout, r, 0.0);
        let (bx, by) = polar(layout, r, std::f64::consts::PI);
        return format!(
            "M {tx:.2} {ty:.2} A {r:.2} {r:.2} 0 1 1 {bx:.2} {by:.2} A {r:.2} {r:.2} 0 1 1 {tx:.2} {ty:.2} Z"
        );
    }
    let (x0, y0) = polar(layout, r, start);
    let (x1, y1) = polar(layout, r, end);
    let large_arc = u8::from(sweep > std::f64::consts::PI);
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z",
        cx = layout.cx,
        cy = layout.cy,
    )
}

/// Wedges proportional to each share. Non-positive shares get no wedge.
pub fn pie_slices(shares: &[CategoryShare], layout: PieLayout) -> Vec<PieSlice> {
    let total: f64 = shares
        .iter()
        .map(|s| s.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut cursor = 0.0;
    shares
        .iter()
        .filter(|s| s.value.is_finite() && s.value > 0.0)
        .map(|share| {
            let start = cursor;
            let end = start + TAU * share.value / total;
            cursor = end;
            let (label_x, label_y) =
                polar(&layout, layout.radius * layout.label_offset, (start + end) / 2.0);
            PieSlice {
                name: share.name,
                value: share.value,
                start_angle: start,
                end_angle: end,
                path: wedge_path(&layout, start, end),
                label_x,
                label_y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly(values: &[f64]) -> Vec<MonthlyPoint> {
        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| MonthlyPoint {
                month: idx as u8 + 1,
                value,
            })
            .collect()
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(97.3), 100.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn line_points_stay_inside_plot() {
        let area = PlotArea::default();
        let geometry = line_geometry(&monthly(&[0.0, 25.0, 99.0, 50.0]), area);

        assert_eq!(geometry.y_max, 100.0);
        assert_eq!(geometry.points.len(), 4);
        assert_eq!(geometry.points[0].x, area.left());
        assert_eq!(geometry.points[3].x, area.right());
        assert_eq!(geometry.points[0].y, area.bottom());
        for point in &geometry.points {
            assert!(point.y >= area.top() && point.y <= area.bottom());
        }
        // Higher values sit higher on screen (smaller y).
        assert!(geometry.points[2].y < geometry.points[1].y);
    }

    #[test]
    fn ticks_cover_domain() {
        let geometry = line_geometry(&monthly(&[60.0, 95.0]), PlotArea::default());
        let labels: Vec<_> = geometry.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "25", "50", "75", "100"]);
        let months: Vec<_> = geometry.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(months, ["1", "2"]);
    }

    #[test]
    fn single_point_is_centered() {
        let area = PlotArea::default();
        let geometry = line_geometry(&monthly(&[10.0]), area);
        assert_eq!(geometry.points[0].x, (area.left() + area.right()) / 2.0);
        assert_eq!(geometry.polyline().split(' ').count(), 1);
    }

    #[test]
    fn pie_angles_cover_full_turn() {
        let shares = [
            CategoryShare {
                name: "Work",
                value: 40.0,
            },
            CategoryShare {
                name: "Fitness",
                value: 30.0,
            },
            CategoryShare {
                name: "Personal",
                value: 30.0,
            },
        ];
        let slices = pie_slices(&shares, PieLayout::default());
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[2].end_angle - TAU).abs() < 1e-9);
        assert!((slices[0].end_angle - TAU * 0.4).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn pie_labels_sit_outside_the_disc() {
        let layout = PieLayout::default();
        let shares = [
            CategoryShare {
                name: "A",
                value: 1.0,
            },
            CategoryShare {
                name: "B",
                value: 3.0,
            },
        ];
        for slice in pie_slices(&shares, layout) {
            let dx = slice.label_x - layout.cx;
            let dy = slice.label_y - layout.cy;
            assert!((dx * dx + dy * dy).sqrt() > layout.radius);
            assert!(slice.path.starts_with('M'));
        }
    }

    #[test]
    fn lone_share_draws_a_full_disc() {
        let shares = [CategoryShare {
            name: "All",
            value: 5.0,
        }];
        let slices = pie_slices(&shares, PieLayout::default());
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches('A').count(), 2);
    }

    #[test]
    fn empty_or_zero_shares_draw_nothing() {
        assert!(pie_slices(&[], PieLayout::default()).is_empty());
        let zero = [CategoryShare {
            name: "Z",
            value: 0.0,
        }];
        assert!(pie_slices(&zero, PieLayout::default()).is_empty());
    }
}
