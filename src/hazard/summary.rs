use serde::Serialize;
use smallvec::SmallVec;

use super::HazardFeature;

/// Representative severity of one hazard layer over one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardSummary {
    pub layer: String,
    pub most_common_value: i64,
    pub count: usize,
}

/// Severity tallies for one layer, in first-seen order. Severity scales are tiny (1..=3).
#[derive(Debug, Default)]
struct Tally {
    counts: SmallVec<[(i64, usize); 4]>,
}

impl Tally {
    fn add(&mut self, severity: i64) {
        match self.counts.iter_mut().find(|(value, _)| *value == severity) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((severity, 1)),
        }
    }

    /// Most frequent severity; on equal counts the first one seen wins.
    fn mode(&self) -> Option<(i64, usize)> {
        self.counts.iter().copied().fold(None, |best, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
    }
}

/// Group features by layer and reduce each group to its most frequent severity.
/// Layers appear in the order they are first encountered.
pub fn summarize<'a>(hazards: impl IntoIterator<Item = &'a HazardFeature>) -> Vec<HazardSummary> {
    let mut layers: Vec<(&'a str, Tally)> = Vec::new();

    for feature in hazards {
        let position = match layers.iter().position(|(name, _)| *name == feature.layer) {
            Some(position) => position,
            None => {
                layers.push((feature.layer.as_str(), Tally::default()));
                layers.len() - 1
            }
        };
        layers[position].1.add(feature.severity);
    }

    layers.into_iter()
        .filter_map(|(layer, tally)| {
            tally.mode().map(|(most_common_value, count)| HazardSummary {
                layer: layer.to_string(),
                most_common_value,
                count,
            })
        })
        .collect()
}
