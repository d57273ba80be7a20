use serde::Serialize;
use tracing::warn;

use crate::area::AreaBoundary;
use crate::geom::{check_geometry, ShapeIndex};
use super::{summarize, HazardFeature, HazardSummary};

/// Spatial index over a hazard feature set.
/// Features with invalid geometry are excluded (and logged) when the index is built.
#[derive(Debug)]
pub struct HazardIndex<'a> {
    hazards: &'a [HazardFeature],
    index: ShapeIndex<'a>,
}

impl<'a> HazardIndex<'a> {
    pub fn new(hazards: &'a [HazardFeature]) -> Self {
        let index = ShapeIndex::new(
            hazards.iter().map(|h| &h.geometry),
            |i| format!("{}[{i}]", hazards[i].layer),
        );
        Self { hazards, index }
    }

    /// Number of features that can be evaluated.
    #[inline] pub fn len(&self) -> usize { self.index.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.index.len() == 0 }

    /// Number of features left out because their geometry is invalid.
    #[inline] pub fn excluded_count(&self) -> usize { self.index.excluded().len() }

    /// Hazard features whose geometry intersects the area, in input order.
    /// An area with invalid geometry intersects nothing.
    pub fn intersecting(&self, area: &AreaBoundary) -> Vec<&'a HazardFeature> {
        if let Err(reason) = check_geometry(&area.geometry) {
            warn!(area = %area.name, %reason, "excluding area with invalid boundary geometry");
            return Vec::new();
        }
        self.index.intersecting(&area.geometry).into_iter()
            .map(|i| &self.hazards[i])
            .collect()
    }

    /// Per-layer severity summary for one area.
    pub fn summarize_area(&self, area: &AreaBoundary) -> Vec<HazardSummary> {
        summarize(self.intersecting(area))
    }
}

/// Hazard features intersecting one area. Builds a throwaway index; for many areas
/// over the same hazard set, use [`HazardIndex`] or [`summarize_areas`].
pub fn intersecting<'a>(area: &AreaBoundary, hazards: &'a [HazardFeature]) -> Vec<&'a HazardFeature> {
    HazardIndex::new(hazards).intersecting(area)
}

/// Hazard summaries for one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaHazardReport {
    pub area: String,
    pub summaries: Vec<HazardSummary>,
}

/// Summarize a hazard set over every area, indexing the hazards once.
/// The output has one report per area, in area order.
pub fn summarize_areas(areas: &[AreaBoundary], hazards: &[HazardFeature]) -> Vec<AreaHazardReport> {
    let index = HazardIndex::new(hazards);
    areas.iter()
        .map(|area| AreaHazardReport {
            area: area.name.clone(),
            summaries: index.summarize_area(area),
        })
        .collect()
}
