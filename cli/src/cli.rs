use std::path::PathBuf;

/// Barangay greenness ranking, hazard overlap and greening scenarios
#[derive(clap::Parser, Debug)]
#[command(name = "greenindex", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Rank an indicator dataset by greenness score
    Rank(RankArgs),

    /// Join indicator records onto boundary polygons, emitting GeoJSON
    Merge(MergeArgs),

    /// Summarize hazard layers over each boundary polygon
    Hazards(HazardsArgs),

    /// Project a greening scenario for one barangay
    Simulate(SimulateArgs),
}

#[derive(clap::Args, Debug)]
pub struct RankArgs {
    /// Indicator dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub indicators: PathBuf,

    /// Output file, "-" for stdout (default)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Boundary polygons (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Indicator dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub indicators: PathBuf,

    /// Join on names with punctuation and whitespace removed
    #[arg(long)]
    pub compact: bool,

    /// Output file, "-" for stdout (default)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct HazardsArgs {
    /// Boundary polygons (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Flood hazard layer, severity read from "Var" (repeatable)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub flood: Vec<PathBuf>,

    /// Storm-surge hazard layer, severity read from "HAZ" (repeatable)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub storm: Vec<PathBuf>,

    /// JSON array of layer specs ({name, path, severity_property})
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub layers: Option<PathBuf>,

    /// Output file, "-" for stdout (default)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Indicator dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub indicators: PathBuf,

    /// Barangay to project, matched on its compact name
    pub area: String,

    /// Scenario parameters as JSON; omitted fields take defaults
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub params: Option<PathBuf>,

    /// Export file, "-" for stdout (default)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
