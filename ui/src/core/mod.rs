//! Platform-agnostic building blocks shared by the planner and the charts.

pub mod color;
pub mod config;
pub mod error;
pub mod format;

pub use config::PlannerConfig;
pub use error::{ConfigError, PlannerError};
