//! Planner configuration: calendar window, intensity nudging and heat palette.
//!
//! Defaults reproduce the stock planner (365 days from 2024-01-01, +0.2 per
//! added event, hue 200 at 80% saturation). Hosts can override any field by
//! providing a JSON document; missing fields fall back to the defaults.

use serde::Deserialize;
use time::{macros::date, Date};

use super::error::ConfigError;

/// First calendar day of the heatmap strip.
pub const DEFAULT_EPOCH: Date = date!(2024 - 01 - 01);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Date of the first day-record.
    pub epoch: Date,
    /// Number of consecutive day-records to generate.
    pub day_count: usize,
    /// Intensity added to a day every time an event is recorded.
    pub intensity_step: f64,
    /// Heat palette hue in degrees.
    pub hue: f64,
    /// Heat palette saturation in percent.
    pub saturation: f64,
    /// Fixed seed for reproducible synthetic data. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            day_count: 365,
            intensity_step: 0.2,
            hue: 200.0,
            saturation: 80.0,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_day_count(mut self, day_count: usize) -> Self {
        self.day_count = day_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.intensity_step > 0.0 && self.intensity_step <= 1.0) {
            return Err(ConfigError::IntensityStep(self.intensity_step));
        }
        if !(0.0..360.0).contains(&self.hue) {
            return Err(ConfigError::Hue(self.hue));
        }
        if !(0.0..=100.0).contains(&self.saturation) {
            return Err(ConfigError::Saturation(self.saturation));
        }
        Ok(())
    }
}
