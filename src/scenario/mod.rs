mod export;
mod input;
mod recommend;
mod simulate;

pub use export::ScenarioExport;
pub use input::{FloodingSeverity, InterventionType, ScenarioError, ScenarioInput};
pub use recommend::{Priority, Recommendation, recommend};
pub use simulate::{
    CANOPY_REALIZATION, CostOutlook, EnvironmentalImpact, FinalGi, NDVI_REALIZATION,
    ScenarioProjection, TrajectoryPoint, simulate,
};
