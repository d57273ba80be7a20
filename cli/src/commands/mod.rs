pub mod hazards;
pub mod merge;
pub mod rank;
pub mod simulate;
