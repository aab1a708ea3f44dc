//! Error types for planner configuration and state transitions.

use time::Date;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("intensity step must be in (0, 1], got {0}")]
    IntensityStep(f64),
    #[error("hue must be in [0, 360), got {0}")]
    Hue(f64),
    #[error("saturation must be in [0, 100], got {0}")]
    Saturation(f64),
    #[error("malformed planner config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("no day-record for {0}")]
    UnknownDay(Date),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
