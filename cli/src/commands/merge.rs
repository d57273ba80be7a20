use anyhow::Result;
use greenindex::io::{merged_to_geojson, read_boundaries, read_indicators, write_json};
use greenindex::{IndicatorTable, JoinKey, merge};
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::MergeArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("-".into());
    let join = if args.compact { JoinKey::Compact } else { JoinKey::Normalized };

    info!("[merge] loading boundaries from {}", args.boundaries.display());
    let boundaries = read_boundaries(&args.boundaries)?;

    info!("[merge] loading indicators from {}", args.indicators.display());
    let table = IndicatorTable::build(read_indicators(&args.indicators)?, join);

    let merged = merge(&boundaries, &table);
    let joined = merged.iter().filter(|area| area.metrics.is_some()).count();
    info!("[merge] joined {joined} of {} boundaries ({:?} key)", merged.len(), table.join_key());

    write_json(out_path, &merged_to_geojson(&merged))
}
