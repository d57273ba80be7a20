use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};
use serde_json::Value;

use crate::indicator::{ranked_rows, IndicatorRecord, RankedRow, RawIndicatorRow};

/// Reads the indicator dataset from a JSON array of rows.
pub fn read_indicator_json(path: &Path) -> Result<Vec<RawIndicatorRow>> {
    let file = File::open(path)
        .with_context(|| format!("[io::indicators::read] Failed to open JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::indicators::read] Failed to parse indicator rows from {}", path.display()))
}

/// Reads the indicator dataset from a CSV file with a header row.
/// Every column is read as text; numeric parsing is left to the sanitize step.
pub fn read_indicator_csv(path: &Path) -> Result<Vec<RawIndicatorRow>> {
    let file = File::open(path)
        .with_context(|| format!("[io::indicators::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::indicators::read] Failed to read CSV from {}", path.display()))?;
    rows_from_frame(&df)
}

/// Text values of a column, or `None` if the frame lacks it.
fn text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    let Ok(col) = df.column(name) else { return Ok(None) };
    let values = col.as_materialized_series()
        .str()
        .map_err(|e| anyhow!("[io::indicators] Column '{name}' is not text: {e}"))?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(Some(values))
}

fn rows_from_frame(df: &DataFrame) -> Result<Vec<RawIndicatorRow>> {
    if df.column("name").is_err() {
        bail!("[io::indicators] Indicator dataset has no 'name' column");
    }

    let name = text_column(df, "name")?;
    let greenery_index = text_column(df, "greenery_index")?;
    let ndvi = text_column(df, "ndvi")?;
    let lst = text_column(df, "lst")?;
    let tree_canopy = text_column(df, "tree_canopy")?;
    let flood_exposure = text_column(df, "flood_exposure")?;
    let current_intervention = text_column(df, "current_intervention")?;

    let cell = |column: &Option<Vec<Option<String>>>, i: usize| -> Option<String> {
        column.as_ref().and_then(|values| values[i].clone())
    };
    let value = |column: &Option<Vec<Option<String>>>, i: usize| cell(column, i).map(Value::String);

    Ok((0..df.height())
        .map(|i| RawIndicatorRow {
            name: cell(&name, i),
            greenery_index: value(&greenery_index, i),
            ndvi: value(&ndvi, i),
            lst: value(&lst, i),
            tree_canopy: value(&tree_canopy, i),
            flood_exposure: value(&flood_exposure, i),
            current_intervention: value(&current_intervention, i),
        })
        .collect())
}

/// Reads and sanitizes an indicator dataset, choosing the format by file extension
/// (`.csv`, otherwise JSON). Any read or parse failure aborts the whole load.
pub fn read_indicators(path: &Path) -> Result<Vec<IndicatorRecord>> {
    let is_csv = path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let rows = if is_csv { read_indicator_csv(path)? } else { read_indicator_json(path)? };
    Ok(rows.iter().map(RawIndicatorRow::sanitize).collect())
}

/// Load, sanitize and rank an indicator dataset. No partial result is ever returned.
pub fn load_ranked(path: &Path) -> Result<Vec<RankedRow>> {
    Ok(ranked_rows(&read_indicators(path)?))
}
