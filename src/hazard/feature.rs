use std::path::PathBuf;

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

/// Severity property used by flood-hazard layers.
pub const FLOOD_SEVERITY_PROPERTY: &str = "Var";

/// Severity property used by storm-surge layers.
pub const STORM_SEVERITY_PROPERTY: &str = "HAZ";

/// One severity-tagged polygon of a named hazard layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardFeature {
    pub layer: String, // e.g. "floodLayer5Yr", "stormLayerAdv2"
    pub geometry: MultiPolygon<f64>,
    pub severity: i64,
}

impl HazardFeature {
    pub fn new(layer: impl Into<String>, geometry: impl Into<MultiPolygon<f64>>, severity: i64) -> Self {
        Self { layer: layer.into(), geometry: geometry.into(), severity }
    }
}

/// Where a hazard layer comes from and which property carries its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardLayerSpec {
    pub name: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    pub severity_property: String,
}

impl HazardLayerSpec {
    /// A flood layer, severity in `Var`.
    pub fn flood(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: Some(path.into()), severity_property: FLOOD_SEVERITY_PROPERTY.into() }
    }

    /// A storm-surge layer, severity in `HAZ`.
    pub fn storm_surge(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: Some(path.into()), severity_property: STORM_SEVERITY_PROPERTY.into() }
    }
}
