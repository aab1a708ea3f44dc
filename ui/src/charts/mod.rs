//! Inline SVG charts for the analytics panels.

pub mod geometry;

mod line;
pub use line::LineChart;

mod pie;
pub use pie::PieChart;

mod panels;
pub use panels::AnalyticsPanels;
