mod bbox;
mod geom;

pub use geom::check_geometry;
pub(crate) use geom::ShapeIndex;
