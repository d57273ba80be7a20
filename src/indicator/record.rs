use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Flood exposure reported when the source row carries none.
pub const UNKNOWN_EXPOSURE: &str = "Unknown";

/// A row of the indicator dataset exactly as it arrives, before any defaults apply.
/// Numeric columns stay untyped so that strings such as `"0.61"` or `"n/a"` survive parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawIndicatorRow {
    pub name: Option<String>,
    pub greenery_index: Option<Value>,
    pub ndvi: Option<Value>,
    pub lst: Option<Value>,
    pub tree_canopy: Option<Value>, // fraction 0-1
    pub flood_exposure: Option<Value>,
    pub current_intervention: Option<Value>,
}

/// Greenness metrics for one area, after the sanitize step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub name: String,
    pub greenness_score: f64,
    pub ndvi_mean: f64,
    pub canopy_cover_pct: f64, // percentage, 0-100
    pub mean_lst: f64, // °C
    pub flood_exposure: String,
    pub current_intervention: String,
}

impl RawIndicatorRow {
    /// Apply the default policy for incomplete rows:
    ///
    /// | field                  | missing / non-numeric |
    /// |------------------------|-----------------------|
    /// | `greenery_index`       | `0.0`                 |
    /// | `ndvi`, `lst`          | `0.0`                 |
    /// | `tree_canopy`          | `0.0`                 |
    /// | `flood_exposure`       | `"Unknown"`           |
    /// | `current_intervention` | `""`                  |
    ///
    /// Never fails; a row with no name keeps an empty name.
    pub fn sanitize(&self) -> IndicatorRecord {
        let name = self.name.as_deref().unwrap_or_default().trim().to_string();

        let mut defaulted = Vec::new();
        let mut number = |field: &'static str, value: &Option<Value>| {
            numeric(value).unwrap_or_else(|| {
                defaulted.push(field);
                0.0
            })
        };

        let greenness_score = number("greenery_index", &self.greenery_index);
        let ndvi_mean = number("ndvi", &self.ndvi);
        let mean_lst = number("lst", &self.lst);
        let tree_canopy = number("tree_canopy", &self.tree_canopy);

        let flood_exposure = text(&self.flood_exposure)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_EXPOSURE.to_string());
        let current_intervention = text(&self.current_intervention).unwrap_or_default();

        if !defaulted.is_empty() {
            debug!(area = %name, fields = ?defaulted, "defaulted missing indicator values to 0");
        }

        IndicatorRecord {
            name,
            greenness_score,
            ndvi_mean,
            canopy_cover_pct: tree_canopy * 100.0,
            mean_lst,
            flood_exposure,
            current_intervention,
        }
    }
}

/// Finite number from a JSON number or numeric string.
fn numeric(value: &Option<Value>) -> Option<f64> {
    let parsed = match value.as_ref()? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Trimmed text from a JSON string, or the textual form of a scalar.
fn text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
