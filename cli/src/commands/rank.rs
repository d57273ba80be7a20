use anyhow::Result;
use greenindex::io::{load_ranked, write_json};
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RankArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("-".into());

    info!("[rank] loading indicators from {}", args.indicators.display());
    let rows = load_ranked(&args.indicators)?;

    info!("[rank] writing {} ranked rows to {}", rows.len(), out_path.display());
    write_json(out_path, &rows)
}
