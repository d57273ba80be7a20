mod level;
mod rank;
mod record;
mod table;

pub use level::{Band, GiLevel, HeatLevel, band_lookup};
pub use rank::{RankedIndicator, RankedRow, rank, ranked_rows};
pub use record::{IndicatorRecord, RawIndicatorRow, UNKNOWN_EXPOSURE};
pub use table::{IndicatorTable, JoinKey};
