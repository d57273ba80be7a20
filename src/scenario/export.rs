use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicator::IndicatorRecord;
use super::{ScenarioInput, ScenarioProjection};

/// Downloadable record of a scenario run. Written once, never read back by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioExport {
    pub timestamp: DateTime<Utc>,
    pub inputs: ScenarioInput,
    pub baseline: IndicatorRecord,
    pub results: ScenarioProjection,
}

impl ScenarioExport {
    pub fn new(
        timestamp: DateTime<Utc>,
        inputs: ScenarioInput,
        baseline: IndicatorRecord,
        results: ScenarioProjection,
    ) -> Self {
        Self { timestamp, inputs, baseline, results }
    }

    /// Stamp the export with the current time.
    pub fn now(inputs: ScenarioInput, baseline: IndicatorRecord, results: ScenarioProjection) -> Self {
        Self::new(Utc::now(), inputs, baseline, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::simulate;
    use chrono::TimeZone;

    #[test]
    fn export_document_shape() {
        let baseline = IndicatorRecord {
            name: "Guadalupe".to_string(),
            greenness_score: 0.47,
            ndvi_mean: 0.42,
            canopy_cover_pct: 19.5,
            mean_lst: 34.1,
            flood_exposure: "High".to_string(),
            current_intervention: String::new(),
        };
        let inputs = ScenarioInput::default();
        let results = simulate(&baseline, &inputs).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 8, 30, 0).unwrap();

        let export = ScenarioExport::new(timestamp, inputs, baseline, results);
        let value = serde_json::to_value(&export).unwrap();

        assert_eq!(value["timestamp"], "2026-03-14T08:30:00Z");
        assert_eq!(value["inputs"]["intervention_type"], "mixed strategy");
        assert_eq!(value["inputs"]["flooding_severity"], "medium");
        assert_eq!(value["baseline"]["name"], "Guadalupe");
        assert_eq!(value["results"]["final_gi"]["level"], "High");
        assert_eq!(value["results"]["trajectory"].as_array().map(Vec::len), Some(6));
    }
}
