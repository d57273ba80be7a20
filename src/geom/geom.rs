use geo::{Area, Intersects, MultiPolygon, Validation};
use rstar::RTree;
use tracing::warn;

use super::bbox::{envelope_of, ShapeEnvelope};

/// Check that a MultiPolygon can be evaluated by spatial predicates.
/// Returns a description of the first problem found.
pub fn check_geometry(shape: &MultiPolygon<f64>) -> Result<(), String> {
    if shape.0.is_empty() {
        return Err("empty geometry".to_string());
    }
    shape.check_validation().map_err(|e| e.to_string())?;
    if let Some(i) = shape.0.iter().position(|polygon| polygon.unsigned_area() == 0.0) {
        return Err(format!("polygon {i} is degenerate (zero area)"));
    }
    Ok(())
}

/// R-tree over the valid members of a borrowed MultiPolygon collection.
/// Indices always refer to positions in the input sequence; invalid shapes are never returned.
#[derive(Debug)]
pub(crate) struct ShapeIndex<'a> {
    shapes: Vec<&'a MultiPolygon<f64>>,
    rtree: RTree<ShapeEnvelope>,
    excluded: Vec<usize>,
}

impl<'a> ShapeIndex<'a> {
    /// Construct the index, logging and skipping shapes that fail validation.
    pub(crate) fn new(
        shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>,
        label: impl Fn(usize) -> String,
    ) -> Self {
        let shapes: Vec<&'a MultiPolygon<f64>> = shapes.into_iter().collect();
        let mut entries = Vec::with_capacity(shapes.len());
        let mut excluded = Vec::new();

        for (i, shape) in shapes.iter().enumerate() {
            let entry = check_geometry(shape)
                .and_then(|()| ShapeEnvelope::of(i, shape).ok_or_else(|| "no bounding box".to_string()));
            match entry {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    warn!(feature = %label(i), %reason, "excluding invalid geometry");
                    excluded.push(i);
                }
            }
        }

        Self { shapes, rtree: RTree::bulk_load(entries), excluded }
    }

    /// Get the number of indexed (valid) shapes.
    #[inline] pub(crate) fn len(&self) -> usize { self.rtree.size() }

    /// Positions of shapes that were left out of the index.
    #[inline] pub(crate) fn excluded(&self) -> &[usize] { &self.excluded }

    /// Indices of all valid shapes intersecting `target`, in ascending order.
    pub(crate) fn intersecting(&self, target: &MultiPolygon<f64>) -> Vec<usize> {
        let Some(envelope) = envelope_of(target) else { return Vec::new() };

        let mut hits: Vec<usize> = self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.idx())
            .filter(|&i| self.shapes[i].intersects(target))
            .collect();
        // R-tree traversal order is arbitrary; restore input order
        hits.sort_unstable();
        hits
    }
}
