use geo::MultiPolygon;

/// Administrative boundary of a single area (barangay).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaBoundary {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

impl AreaBoundary {
    pub fn new(name: impl Into<String>, geometry: impl Into<MultiPolygon<f64>>) -> Self {
        Self { name: name.into(), geometry: geometry.into() }
    }
}
