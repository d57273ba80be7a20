mod feature;
mod intersect;
mod summary;

pub use feature::{FLOOD_SEVERITY_PROPERTY, HazardFeature, HazardLayerSpec, STORM_SEVERITY_PROPERTY};
pub use intersect::{AreaHazardReport, HazardIndex, intersecting, summarize_areas};
pub use summary::{HazardSummary, summarize};
