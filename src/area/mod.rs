mod boundary;
mod merge;
mod normalize;

pub use boundary::AreaBoundary;
pub use merge::{MergedArea, merge};
pub use normalize::{compact_name, normalize_name};
