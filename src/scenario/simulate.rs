//! Deterministic multi-year projection of an area's greenness under a proposed intervention.
//!
//! The model realizes only part of the stated targets (implementation shortfall), grows the
//! vegetation sub-score linearly toward the realized NDVI gain, and lets environmental quality
//! improve with progress while eroding with rising temperature:
//!
//! ```text
//! quantity(y)    = ndvi_mean + ndvi_gain * y / horizon
//! quality(y)     = 0.62 + 0.18 * y / horizon - temperature_rate * y * 0.5
//! gi(y)          = 0.6 * quantity(y) + 0.4 * quality(y)
//! ```
//!
//! Reported values are rounded to three decimals; rounding never feeds back into the model.

use serde::{Deserialize, Serialize};

use crate::indicator::{GiLevel, IndicatorRecord};
use super::{recommend, InterventionType, Recommendation, ScenarioError, ScenarioInput};

/// Share of the canopy target that is actually realized.
pub const CANOPY_REALIZATION: f64 = 0.85;

/// Share of the NDVI target that is actually realized.
pub const NDVI_REALIZATION: f64 = 0.9;

const QUALITY_BASE: f64 = 0.62;
const QUALITY_GAIN: f64 = 0.18;
const HEAT_PENALTY: f64 = 0.5;
const QUANTITY_WEIGHT: f64 = 0.6;
const QUALITY_WEIGHT: f64 = 0.4;

/// Extra stormwater retention credited to rain gardens.
const RAIN_GARDEN_RETENTION: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: u32,
    pub gi_score: f64,
    pub quantity_score: f64,
    pub environmental_quality_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalGi {
    pub score: f64,
    pub level: GiLevel,
}

/// One-off environmental benefits of the realized intervention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub cooling_potential: f64, // °C
    pub canopy_gain: f64, // %
    pub stormwater_retention: f64,
    pub pm25_removal: f64,
    pub no2_removal: f64,
}

/// Spending implied by the budget over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOutlook {
    pub greenable_area_sqm: f64,
    pub annual_maintenance: f64,
    pub lifecycle_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub trajectory: Vec<TrajectoryPoint>, // years 0..=time_horizon
    pub final_gi: FinalGi,
    pub environmental_impact: EnvironmentalImpact,
    pub costs: CostOutlook,
    pub recommendation: Recommendation,
}

/// Round to three decimals; `-0.0` comes out as `0.0`.
#[inline]
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

impl EnvironmentalImpact {
    fn estimate(canopy_gain: f64, ndvi_gain: f64, intervention: InterventionType) -> Self {
        let rain_garden = if intervention == InterventionType::RainGarden { RAIN_GARDEN_RETENTION } else { 0.0 };
        Self {
            cooling_potential: canopy_gain * 0.12 + ndvi_gain * 2.5,
            canopy_gain,
            stormwater_retention: canopy_gain * 12.0 + rain_garden,
            pm25_removal: canopy_gain * 0.8 + ndvi_gain * 15.0,
            no2_removal: canopy_gain * 0.4 + ndvi_gain * 8.0,
        }
    }
}

impl CostOutlook {
    fn estimate(input: &ScenarioInput) -> Self {
        let annual_maintenance = input.total_budget_cap * input.maintenance_cost_rate / 100.0;
        Self {
            greenable_area_sqm: input.total_budget_cap / input.cost_per_sqm,
            annual_maintenance,
            lifecycle_cost: input.total_budget_cap + annual_maintenance * f64::from(input.time_horizon),
        }
    }
}

/// Project `baseline` forward under `input`. Parameters are validated first; nothing is
/// computed for an invalid scenario.
pub fn simulate(baseline: &IndicatorRecord, input: &ScenarioInput) -> Result<ScenarioProjection, ScenarioError> {
    input.validate()?;

    let canopy_gain = input.canopy_target_percent * CANOPY_REALIZATION;
    let ndvi_gain = input.ndvi_target * NDVI_REALIZATION;
    let environmental_impact = EnvironmentalImpact::estimate(canopy_gain, ndvi_gain, input.intervention_type);

    let horizon = f64::from(input.time_horizon);
    let trajectory: Vec<TrajectoryPoint> = (0..=input.time_horizon)
        .map(|year| {
            let elapsed = f64::from(year);
            let progress = elapsed / horizon;
            let quantity = baseline.ndvi_mean + ndvi_gain * progress;
            let quality = QUALITY_BASE + QUALITY_GAIN * progress
                - input.temperature_increase_rate * elapsed * HEAT_PENALTY;
            let gi = quantity * QUANTITY_WEIGHT + quality * QUALITY_WEIGHT;

            TrajectoryPoint {
                year,
                gi_score: round3(gi),
                quantity_score: round3(quantity),
                environmental_quality_score: round3(quality),
            }
        })
        .collect();

    // horizon >= 1, so the trajectory holds at least two points
    let score = trajectory.last().map_or(0.0, |point| point.gi_score);
    let final_gi = FinalGi { score, level: GiLevel::classify(score) };

    Ok(ScenarioProjection {
        trajectory,
        final_gi,
        recommendation: recommend(input, environmental_impact.cooling_potential),
        environmental_impact,
        costs: CostOutlook::estimate(input),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{FloodingSeverity, Priority};
    use approx::assert_relative_eq;

    fn baseline(ndvi_mean: f64) -> IndicatorRecord {
        IndicatorRecord {
            name: "Lahug".to_string(),
            greenness_score: 0.58,
            ndvi_mean,
            canopy_cover_pct: 22.0,
            mean_lst: 33.4,
            flood_exposure: "Moderate".to_string(),
            current_intervention: String::new(),
        }
    }

    fn example_input() -> ScenarioInput {
        ScenarioInput {
            ndvi_target: 0.15,
            canopy_target_percent: 15.0,
            time_horizon: 5,
            temperature_increase_rate: 0.03,
            flooding_severity: FloodingSeverity::Medium,
            rainfall_change_rate: 5.0,
            total_budget_cap: 5_000_000.0,
            intervention_type: InterventionType::MixedStrategy,
            ..Default::default()
        }
    }

    #[test]
    fn worked_example() {
        let projection = simulate(&baseline(0.42), &example_input()).unwrap();

        assert_eq!(projection.trajectory.len(), 6);
        let last = projection.trajectory[5];
        assert_eq!(last.year, 5);
        assert_eq!(last.quantity_score, 0.555);
        assert_eq!(last.environmental_quality_score, 0.725);
        assert_eq!(last.gi_score, 0.623);

        assert_eq!(projection.final_gi, FinalGi { score: 0.623, level: GiLevel::High });
        assert_eq!(projection.recommendation.strategy, "Mixed Strategy with Urban Canopy Focus");
        assert_eq!(projection.recommendation.priority, Priority::Moderate);
    }

    #[test]
    fn year_zero_reproduces_baseline() {
        let projection = simulate(&baseline(0.42), &example_input()).unwrap();
        let first = projection.trajectory[0];

        assert_eq!(first.year, 0);
        assert_eq!(first.quantity_score, 0.42);
        assert_eq!(first.environmental_quality_score, 0.62);
    }

    #[test]
    fn impact_estimates() {
        let projection = simulate(&baseline(0.42), &example_input()).unwrap();
        let impact = projection.environmental_impact;

        // canopy_gain = 12.75, ndvi_gain = 0.135
        assert_relative_eq!(impact.canopy_gain, 12.75, epsilon = 1e-12);
        assert_relative_eq!(impact.cooling_potential, 12.75 * 0.12 + 0.135 * 2.5, epsilon = 1e-12);
        assert_relative_eq!(impact.stormwater_retention, 153.0, epsilon = 1e-9);
        assert_relative_eq!(impact.pm25_removal, 12.75 * 0.8 + 0.135 * 15.0, epsilon = 1e-12);
        assert_relative_eq!(impact.no2_removal, 12.75 * 0.4 + 0.135 * 8.0, epsilon = 1e-12);

        let rain_garden = ScenarioInput { intervention_type: InterventionType::RainGarden, ..example_input() };
        let projection = simulate(&baseline(0.42), &rain_garden).unwrap();
        assert_relative_eq!(projection.environmental_impact.stormwater_retention, 203.0, epsilon = 1e-9);
    }

    #[test]
    fn cost_outlook() {
        let input = ScenarioInput { cost_per_sqm: 2_000.0, maintenance_cost_rate: 4.0, ..example_input() };
        let costs = simulate(&baseline(0.42), &input).unwrap().costs;

        assert_relative_eq!(costs.greenable_area_sqm, 2_500.0);
        assert_relative_eq!(costs.annual_maintenance, 200_000.0);
        assert_relative_eq!(costs.lifecycle_cost, 6_000_000.0);
    }

    #[test]
    fn rounding_does_not_accumulate() {
        // ndvi_gain / horizon is not representable at three decimals
        let input = ScenarioInput { ndvi_target: 0.1, time_horizon: 7, ..example_input() };
        let projection = simulate(&baseline(0.3), &input).unwrap();

        for point in &projection.trajectory {
            let progress = f64::from(point.year) / 7.0;
            let expected = 0.3 + 0.1 * NDVI_REALIZATION * progress;
            assert_eq!(point.quantity_score, round3(expected));
        }
    }

    #[test]
    fn rounding_never_yields_negative_zero() {
        for value in [-0.0004, -0.0, -1e-9] {
            let rounded = round3(value);
            assert_eq!(rounded, 0.0);
            assert!(rounded.is_sign_positive(), "{value} rounded to {rounded}");
            assert_eq!(serde_json::to_string(&rounded).unwrap(), "0.0");
        }
        assert_eq!(round3(-0.0006), -0.001);
    }

    #[test]
    fn heat_erodes_quality_over_time() {
        let input = ScenarioInput { temperature_increase_rate: 0.2, time_horizon: 10, ..example_input() };
        let projection = simulate(&baseline(0.42), &input).unwrap();

        // 0.62 + 0.18 - 0.2 * 10 * 0.5
        assert_eq!(projection.trajectory[10].environmental_quality_score, -0.2);
        assert!(projection.trajectory.windows(2).all(|w| {
            w[1].environmental_quality_score < w[0].environmental_quality_score
        }));
    }

    #[test]
    fn deterministic() {
        let a = simulate(&baseline(0.42), &example_input()).unwrap();
        let b = simulate(&baseline(0.42), &example_input()).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
    }

    #[test]
    fn zero_horizon_is_rejected_before_computing() {
        let input = ScenarioInput { time_horizon: 0, ..example_input() };
        assert_eq!(simulate(&baseline(0.42), &input), Err(ScenarioError::ZeroTimeHorizon));
    }

    #[test]
    fn final_level_uses_last_point() {
        let input = ScenarioInput { ndvi_target: 0.5, temperature_increase_rate: 0.001, ..example_input() };
        let projection = simulate(&baseline(0.6), &input).unwrap();
        // quantity 0.6 + 0.45 = 1.05, quality ~0.7975 -> gi ~0.949
        assert_eq!(projection.final_gi.level, GiLevel::Excellent);
        assert_eq!(projection.final_gi.score, projection.trajectory[5].gi_score);
    }
}
