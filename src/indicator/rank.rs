use std::cmp::Ordering;

use serde::Serialize;

use super::{GiLevel, HeatLevel, IndicatorRecord};

/// An indicator record with its classification and position in the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedIndicator {
    #[serde(flatten)]
    pub record: IndicatorRecord,
    pub level: GiLevel,
    pub rank: u32, // 1 = highest score
}

/// Score used for ordering; anything that is not a finite number ranks as zero.
#[inline]
fn effective_score(record: &IndicatorRecord) -> f64 {
    if record.greenness_score.is_finite() { record.greenness_score } else { 0.0 }
}

/// Classify and rank a complete batch of records.
///
/// Records are ordered by greenness score, highest first. Equal scores keep their input
/// order, so tied records receive distinct consecutive ranks. The result is sorted by rank.
pub fn rank(records: &[IndicatorRecord]) -> Vec<RankedIndicator> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    // sort_by is stable: ties stay in input order
    order.sort_by(|&a, &b| {
        effective_score(&records[b])
            .partial_cmp(&effective_score(&records[a]))
            .unwrap_or(Ordering::Equal)
    });

    order.into_iter().enumerate()
        .map(|(position, i)| {
            let record = records[i].clone();
            RankedIndicator {
                level: GiLevel::classify(effective_score(&record)),
                rank: position as u32 + 1,
                record,
            }
        })
        .collect()
}

/// Flat listing row, as served to map and list views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub brgy_name: String,
    pub gi_score: f64,
    pub gi_level: GiLevel,
    pub gi_rank: u32,
    pub ndvi_mean: f64,
    pub canopy_cover_pct: f64,
    pub mean_lst: f64,
    pub lst_level: HeatLevel,
    pub flood_exposure: String,
    pub current_intervention: String,
}

impl From<RankedIndicator> for RankedRow {
    fn from(ranked: RankedIndicator) -> Self {
        let RankedIndicator { record, level, rank } = ranked;
        Self {
            brgy_name: record.name,
            gi_score: record.greenness_score,
            gi_level: level,
            gi_rank: rank,
            ndvi_mean: record.ndvi_mean,
            canopy_cover_pct: record.canopy_cover_pct,
            lst_level: HeatLevel::classify(record.mean_lst),
            mean_lst: record.mean_lst,
            flood_exposure: record.flood_exposure,
            current_intervention: record.current_intervention,
        }
    }
}

/// Rank a batch and flatten it into listing rows, sorted by `gi_rank` ascending.
pub fn ranked_rows(records: &[IndicatorRecord]) -> Vec<RankedRow> {
    rank(records).into_iter().map(RankedRow::from).collect()
}
