#![doc = "Greenness-index ranking, hazard overlap and greening scenario projection"]
mod area;
mod geom;
mod hazard;
mod indicator;
pub mod io;
mod scenario;

#[doc(inline)]
pub use area::{AreaBoundary, MergedArea, compact_name, merge, normalize_name};

#[doc(inline)]
pub use geom::check_geometry;

#[doc(inline)]
pub use hazard::{
    AreaHazardReport, FLOOD_SEVERITY_PROPERTY, HazardFeature, HazardIndex, HazardLayerSpec,
    HazardSummary, STORM_SEVERITY_PROPERTY, intersecting, summarize, summarize_areas,
};

#[doc(inline)]
pub use indicator::{
    Band, GiLevel, HeatLevel, IndicatorRecord, IndicatorTable, JoinKey, RankedIndicator, RankedRow,
    RawIndicatorRow, UNKNOWN_EXPOSURE, band_lookup, rank, ranked_rows,
};

#[doc(inline)]
pub use scenario::{
    CANOPY_REALIZATION, CostOutlook, EnvironmentalImpact, FinalGi, FloodingSeverity,
    InterventionType, NDVI_REALIZATION, Priority, Recommendation, ScenarioError, ScenarioExport,
    ScenarioInput, ScenarioProjection, TrajectoryPoint, recommend, simulate,
};
