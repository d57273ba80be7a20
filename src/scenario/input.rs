use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected flooding severity over the scenario horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodingSeverity {
    Low,
    Medium,
    High,
}

/// Kind of greening intervention being proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterventionType {
    #[serde(rename = "tree planting")]
    TreePlanting,
    #[serde(rename = "rain garden")]
    RainGarden,
    #[serde(rename = "green corridor")]
    GreenCorridor,
    #[serde(rename = "green roof")]
    GreenRoof,
    #[serde(rename = "mixed strategy")]
    MixedStrategy,
}

impl InterventionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionType::TreePlanting => "tree planting",
            InterventionType::RainGarden => "rain garden",
            InterventionType::GreenCorridor => "green corridor",
            InterventionType::GreenRoof => "green roof",
            InterventionType::MixedStrategy => "mixed strategy",
        }
    }
}

impl fmt::Display for InterventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a proposed intervention and the climate assumptions it is projected under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    pub temperature_increase_rate: f64, // °C per year
    pub flooding_severity: FloodingSeverity,
    pub rainfall_change_rate: f64, // % per year, signed
    pub canopy_target_percent: f64, // target canopy increase, %
    pub ndvi_target: f64, // target NDVI gain
    pub intervention_type: InterventionType,
    pub total_budget_cap: f64,
    pub cost_per_sqm: f64,
    pub maintenance_cost_rate: f64, // % of budget per year
    pub time_horizon: u32, // years
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            temperature_increase_rate: 0.03,
            flooding_severity: FloodingSeverity::Medium,
            rainfall_change_rate: 5.0,
            canopy_target_percent: 15.0,
            ndvi_target: 0.15,
            intervention_type: InterventionType::MixedStrategy,
            total_budget_cap: 5_000_000.0,
            cost_per_sqm: 1_500.0,
            maintenance_cost_rate: 5.0,
            time_horizon: 5,
        }
    }
}

/// Rejected scenario parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("time horizon must be at least one year")]
    ZeroTimeHorizon,

    #[error("invalid scenario parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl ScenarioInput {
    /// Check every parameter against its domain before any projection is computed.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.time_horizon == 0 {
            return Err(ScenarioError::ZeroTimeHorizon);
        }

        let finite = [
            ("temperature_increase_rate", self.temperature_increase_rate),
            ("rainfall_change_rate", self.rainfall_change_rate),
            ("canopy_target_percent", self.canopy_target_percent),
            ("ndvi_target", self.ndvi_target),
            ("total_budget_cap", self.total_budget_cap),
            ("cost_per_sqm", self.cost_per_sqm),
            ("maintenance_cost_rate", self.maintenance_cost_rate),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be a finite number, got {value}")));
            }
        }

        let positive = [
            ("temperature_increase_rate", self.temperature_increase_rate),
            ("canopy_target_percent", self.canopy_target_percent),
            ("ndvi_target", self.ndvi_target),
            ("total_budget_cap", self.total_budget_cap),
            ("cost_per_sqm", self.cost_per_sqm),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(invalid(field, format!("must be greater than zero, got {value}")));
            }
        }

        if self.maintenance_cost_rate < 0.0 {
            return Err(invalid(
                "maintenance_cost_rate",
                format!("must not be negative, got {}", self.maintenance_cost_rate),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ScenarioError {
    ScenarioError::InvalidParameter { field, reason }
}
