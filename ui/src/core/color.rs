//! Heat palette: maps a day's intensity onto a single-hue lightness ramp.
//!
//! Intensity 0 renders near-white (100% lightness) and intensity 1 renders at
//! half lightness. Busier days are always at least as dark as quieter ones.

use std::fmt;

use super::config::PlannerConfig;

const MAX_LIGHTNESS: f64 = 100.0;
const LIGHTNESS_SPAN: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            trim_float(self.hue),
            trim_float(self.saturation),
            trim_float(self.lightness)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPalette {
    pub hue: f64,
    pub saturation: f64,
}

impl Default for HeatPalette {
    fn default() -> Self {
        Self {
            hue: 200.0,
            saturation: 80.0,
        }
    }
}

impl HeatPalette {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            hue: config.hue,
            saturation: config.saturation,
        }
    }

    pub fn color(&self, intensity: f64) -> Hsl {
        Hsl {
            hue: self.hue,
            saturation: self.saturation,
            lightness: lightness(intensity),
        }
    }
}

/// Lightness (percent) for an intensity. Out-of-range input is clamped first.
pub fn lightness(intensity: f64) -> f64 {
    let clamped = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    MAX_LIGHTNESS - clamped * LIGHTNESS_SPAN
}

/// Drop a trailing `.0` and keep at most two decimals for CSS output.
fn trim_float(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let mut text = format!("{rounded:.2}");
        while text.ends_with('0') {
            text.pop();
        }
        text
    }
}
