use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::scenario::ScenarioExport;

/// Writes `value` as pretty-printed JSON to `path`, or to stdout when `path` is `-`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if path.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        serde_json::to_writer_pretty(&mut writer, value).context("[io::json::write] Failed to write JSON to stdout")?;
        writeln!(writer)?;
        return Ok(writer.flush()?);
    }

    let file = File::create(path)
        .with_context(|| format!("[io::json::write] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("[io::json::write] Failed to write JSON to {}", path.display()))?;
    Ok(writer.flush()?)
}

/// Reads a JSON document of type `T` from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("[io::json::read] Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json::read] Failed to parse {}", path.display()))
}

/// Writes a scenario export document.
pub fn write_export(path: &Path, export: &ScenarioExport) -> Result<()> {
    write_json(path, export)
}
