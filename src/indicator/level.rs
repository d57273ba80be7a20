use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of an ordered threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<L> {
    pub lower: f64,
    pub inclusive: bool, // whether `lower` itself belongs to this band
    pub label: L,
}

impl<L> Band<L> {
    pub const fn at_least(lower: f64, label: L) -> Self {
        Self { lower, inclusive: true, label }
    }

    pub const fn above(lower: f64, label: L) -> Self {
        Self { lower, inclusive: false, label }
    }

    #[inline]
    fn admits(&self, value: f64) -> bool {
        if self.inclusive { value >= self.lower } else { value > self.lower }
    }
}

/// Return the label of the first band (in table order) that admits `value`,
/// or `fallback` if none does. Tables are ordered highest bound first.
pub fn band_lookup<L: Copy>(value: f64, bands: &[Band<L>], fallback: L) -> L {
    bands.iter()
        .find(|band| band.admits(value))
        .map_or(fallback, |band| band.label)
}

/// Discrete greenness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GiLevel {
    Low,
    Medium,
    High,
    Excellent,
}

const GI_BANDS: [Band<GiLevel>; 3] = [
    Band::at_least(0.75, GiLevel::Excellent),
    Band::at_least(0.60, GiLevel::High),
    Band::at_least(0.40, GiLevel::Medium),
];

impl GiLevel {
    /// Classify a greenness score. Lower bounds are inclusive.
    pub fn classify(score: f64) -> Self {
        band_lookup(score, &GI_BANDS, GiLevel::Low)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GiLevel::Low => "Low",
            GiLevel::Medium => "Medium",
            GiLevel::High => "High",
            GiLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for GiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Land-surface-temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeatLevel {
    Cool,
    Mild,
    Warm,
    Hot,
    Extreme,
}

const HEAT_BANDS: [Band<HeatLevel>; 4] = [
    Band::above(38.0, HeatLevel::Extreme),
    Band::above(35.0, HeatLevel::Hot),
    Band::above(32.0, HeatLevel::Warm),
    Band::above(29.0, HeatLevel::Mild),
];

impl HeatLevel {
    /// Classify a land surface temperature in °C. Lower bounds are exclusive.
    pub fn classify(lst_celsius: f64) -> Self {
        band_lookup(lst_celsius, &HEAT_BANDS, HeatLevel::Cool)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeatLevel::Cool => "Cool",
            HeatLevel::Mild => "Mild",
            HeatLevel::Warm => "Warm",
            HeatLevel::Hot => "Hot",
            HeatLevel::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
