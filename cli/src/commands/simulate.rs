use anyhow::{Context, Result};
use greenindex::io::{read_indicators, read_json, write_export};
use greenindex::{IndicatorTable, JoinKey, ScenarioExport, ScenarioInput, simulate};
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SimulateArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("-".into());

    info!("[simulate] loading indicators from {}", args.indicators.display());
    let table = IndicatorTable::build(read_indicators(&args.indicators)?, JoinKey::Compact);
    let baseline = table.get(&args.area).cloned()
        .with_context(|| format!("[simulate] no indicator record for '{}'", args.area))?;

    let params: ScenarioInput = match &args.params {
        Some(path) => read_json(path)?,
        None => ScenarioInput::default(),
    };

    let projection = simulate(&baseline, &params)
        .with_context(|| format!("[simulate] invalid scenario for '{}'", baseline.name))?;
    info!("[simulate] {} -> final GI {:.3} ({}) after {} years",
        baseline.name, projection.final_gi.score, projection.final_gi.level, params.time_horizon);

    write_export(out_path, &ScenarioExport::now(params, baseline, projection))
}
