//! The planner heatmap: day-records, session state, search, and the views that
//! render them.

pub mod data;
pub mod search;
pub mod state;

mod editor;
mod heatmap;
mod results;
mod view;

pub use data::{ChartDatasets, DayRecord};
pub use editor::DayEditor;
pub use heatmap::{cell_title, HeatmapStrip};
pub use results::SearchResults;
pub use search::SearchHit;
pub use state::{ModalState, PlannerState};
pub use view::PlannerView;
