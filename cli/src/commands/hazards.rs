use std::path::Path;

use anyhow::Result;
use greenindex::io::{read_boundaries, read_hazard_layer, read_json, write_json};
use greenindex::{HazardLayerSpec, summarize_areas};
use tracing::info;

/// Layer name for a file given on the command line.
fn layer_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::HazardsArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("-".into());

    let mut specs: Vec<HazardLayerSpec> = match &args.layers {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    specs.extend(args.flood.iter().map(|path| HazardLayerSpec::flood(layer_name(path), path)));
    specs.extend(args.storm.iter().map(|path| HazardLayerSpec::storm_surge(layer_name(path), path)));
    anyhow::ensure!(!specs.is_empty(), "[hazards] no hazard layers given (use --flood, --storm or --layers)");

    info!("[hazards] loading boundaries from {}", args.boundaries.display());
    let boundaries = read_boundaries(&args.boundaries)?;

    let mut hazards = Vec::new();
    for spec in &specs {
        let features = read_hazard_layer(spec)?;
        info!("[hazards] layer '{}': {} features", spec.name, features.len());
        hazards.extend(features);
    }

    let reports = summarize_areas(&boundaries, &hazards);
    info!("[hazards] writing summaries for {} areas to {}", reports.len(), out_path.display());
    write_json(out_path, &reports)
}
