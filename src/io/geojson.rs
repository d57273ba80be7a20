use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::area::{AreaBoundary, MergedArea};
use crate::hazard::{HazardFeature, HazardLayerSpec};
use crate::indicator::GiLevel;

/// Property names tried, in order, for an area's name.
const NAME_PROPERTIES: [&str; 3] = ["name", "NAME_3", "brgy_name"];

/// Read a GeoJSON document from `path`.
pub fn read_geojson_file(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("[io::geojson::read] Failed to open GeoJSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::geojson::read] Failed to parse GeoJSON from {}", path.display()))
}

/// The `features` array of a FeatureCollection.
fn features(collection: &Value) -> Result<&Vec<Value>> {
    if collection["type"].as_str() != Some("FeatureCollection") {
        bail!("[io::geojson] Expected a FeatureCollection");
    }
    collection["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] FeatureCollection has no features array"))
}

/// Read area boundaries from a FeatureCollection. Features without a usable name or a
/// Polygon/MultiPolygon geometry are skipped with a warning.
pub fn boundaries_from_geojson(collection: &Value) -> Result<Vec<AreaBoundary>> {
    let mut boundaries = Vec::new();

    for (i, feature) in features(collection)?.iter().enumerate() {
        let properties = &feature["properties"];
        let Some(name) = NAME_PROPERTIES.iter()
            .filter_map(|key| properties[*key].as_str())
            .map(str::trim)
            .find(|name| !name.is_empty())
        else {
            warn!(feature = i, "boundary feature has no name; skipped");
            continue;
        };

        match geometry_from_geojson(&feature["geometry"]) {
            Ok(geometry) => boundaries.push(AreaBoundary::new(name, geometry)),
            Err(e) => warn!(feature = i, area = %name, error = %e, "boundary geometry unreadable; skipped"),
        }
    }

    Ok(boundaries)
}

/// Read area boundaries from a GeoJSON file.
pub fn read_boundaries(path: &Path) -> Result<Vec<AreaBoundary>> {
    boundaries_from_geojson(&read_geojson_file(path)?)
        .with_context(|| format!("[io::geojson::read_boundaries] {}", path.display()))
}

/// Read the features of one hazard layer. Severity comes from the layer's configured
/// property; features without one are skipped. Geometry validity is not checked here.
pub fn hazards_from_geojson(collection: &Value, spec: &HazardLayerSpec) -> Result<Vec<HazardFeature>> {
    let mut hazards = Vec::new();

    for (i, feature) in features(collection)?.iter().enumerate() {
        let Some(severity) = severity(&feature["properties"][spec.severity_property.as_str()]) else {
            warn!(layer = %spec.name, feature = i, property = %spec.severity_property,
                "hazard feature has no integer severity; skipped");
            continue;
        };

        match geometry_from_geojson(&feature["geometry"]) {
            Ok(geometry) => hazards.push(HazardFeature::new(spec.name.as_str(), geometry, severity)),
            Err(e) => warn!(layer = %spec.name, feature = i, error = %e, "hazard geometry unreadable; skipped"),
        }
    }

    Ok(hazards)
}

/// Read one hazard layer from the file named by its spec.
pub fn read_hazard_layer(spec: &HazardLayerSpec) -> Result<Vec<HazardFeature>> {
    let path = spec.path.as_deref()
        .ok_or_else(|| anyhow!("[io::geojson::read_hazard_layer] Layer '{}' has no path", spec.name))?;
    hazards_from_geojson(&read_geojson_file(path)?, spec)
        .with_context(|| format!("[io::geojson::read_hazard_layer] {}", path.display()))
}

/// Integer severity from a number (integral floats accepted) or numeric string.
fn severity(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => return n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    integral(float)
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

/// Parse a GeoJSON Polygon or MultiPolygon geometry object.
pub fn geometry_from_geojson(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates array"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| {
                let rings = polygon.as_array()
                    .ok_or_else(|| anyhow!("MultiPolygon member is not an array"))?;
                parse_polygon_coords(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        Some(other) => bail!("unsupported geometry type '{other}'"),
        None => bail!("geometry has no type"),
    }
}

/// Parse polygon rings: the first is the exterior, the rest are holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| anyhow!("ring is not an array"))
            .and_then(|coords| parse_ring_coords(coords))
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON positions `[[x, y], ...]`; extra ordinates are ignored.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = coords.iter()
        .map(|position| {
            let x = position[0].as_f64().ok_or_else(|| anyhow!("invalid coordinate: x must be a number"))?;
            let y = position[1].as_f64().ok_or_else(|| anyhow!("invalid coordinate: y must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}

/// Write a MultiPolygon as a GeoJSON geometry object.
fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| -> Vec<[f64; 2]> { ls.coords().map(|c| [c.x, c.y]).collect() };
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(ring)
            .collect())
        .collect();

    json!({ "type": "MultiPolygon", "coordinates": polygons })
}

/// Export merged areas as a FeatureCollection. Every boundary becomes a feature; areas
/// without indicator data carry `null` for each metric property.
pub fn merged_to_geojson(merged: &[MergedArea]) -> Value {
    let features: Vec<Value> = merged.iter().map(|area| {
        let mut properties = Map::new();
        properties.insert("name".to_string(), json!(area.boundary.name));

        let metrics = area.metrics.as_ref();
        properties.insert("gi_score".to_string(), json!(metrics.map(|m| m.greenness_score)));
        properties.insert("gi_level".to_string(), json!(area.level().map(|l: GiLevel| l.as_str())));
        properties.insert("ndvi_mean".to_string(), json!(metrics.map(|m| m.ndvi_mean)));
        properties.insert("canopy_cover_pct".to_string(), json!(metrics.map(|m| m.canopy_cover_pct)));
        properties.insert("mean_lst".to_string(), json!(metrics.map(|m| m.mean_lst)));
        properties.insert("flood_exposure".to_string(), json!(metrics.map(|m| &m.flood_exposure)));
        properties.insert("current_intervention".to_string(), json!(metrics.map(|m| &m.current_intervention)));

        json!({
            "type": "Feature",
            "geometry": multipolygon_to_geojson(&area.boundary.geometry),
            "properties": properties,
        })
    }).collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
