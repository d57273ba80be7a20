mod geojson;
mod indicators;
mod json;

pub use geojson::{
    boundaries_from_geojson, geometry_from_geojson, hazards_from_geojson, merged_to_geojson,
    read_boundaries, read_geojson_file, read_hazard_layer,
};
pub use indicators::{load_ranked, read_indicator_csv, read_indicator_json, read_indicators};
pub use json::{read_json, write_export, write_json};
