use crate::indicator::{GiLevel, IndicatorRecord, IndicatorTable};
use super::AreaBoundary;

/// A boundary joined with its indicator record, if the metrics dataset had one.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedArea {
    pub boundary: AreaBoundary,
    pub metrics: Option<IndicatorRecord>,
}

impl MergedArea {
    /// Classification of the joined greenness score, if any.
    pub fn level(&self) -> Option<GiLevel> {
        self.metrics.as_ref().map(|m| GiLevel::classify(m.greenness_score))
    }
}

/// Join every boundary with its metrics by name. The output has one entry per boundary,
/// in boundary order; boundaries without a match carry `metrics: None`.
pub fn merge(boundaries: &[AreaBoundary], table: &IndicatorTable) -> Vec<MergedArea> {
    boundaries.iter()
        .map(|boundary| MergedArea {
            metrics: table.get(&boundary.name).cloned(),
            boundary: boundary.clone(),
        })
        .collect()
}
