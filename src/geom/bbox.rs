use geo::{BoundingRect, MultiPolygon};
use rstar::{RTreeObject, AABB};

/// Axis-aligned envelope of a shape, in the form the R-tree queries with.
pub(super) fn envelope_of(shape: &MultiPolygon<f64>) -> Option<AABB<[f64; 2]>> {
    let rect = shape.bounding_rect()?;
    Some(AABB::from_corners(rect.min().into(), rect.max().into()))
}

/// R-tree entry: the envelope of the shape at position `idx` of the indexed collection.
#[derive(Debug, Clone)]
pub(super) struct ShapeEnvelope {
    idx: usize,
    envelope: AABB<[f64; 2]>,
}

impl ShapeEnvelope {
    /// Entry for `shape`, or `None` if it has no coordinates.
    pub(super) fn of(idx: usize, shape: &MultiPolygon<f64>) -> Option<Self> {
        envelope_of(shape).map(|envelope| Self { idx, envelope })
    }

    #[inline] pub(super) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for ShapeEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope { self.envelope }
}
