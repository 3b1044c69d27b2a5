//! Load command handler.

use std::path::PathBuf;

use anyhow::Context;
use census_analyser::config::AnalyserConfig;
use census_analyser::{CensusAnalyser, DatasetKind, Error};

use super::resolve_input;

/// Loads a dataset and prints how many records it holds.
pub fn cmd_load(config: &AnalyserConfig, dataset: &str, path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut analyser = CensusAnalyser::new(config);

    if dataset.eq_ignore_ascii_case("auto") {
        let path = path.ok_or_else(|| {
            Error::InvalidInput("auto detection needs an input path".to_string())
        })?;
        let (kind, count) = analyser
            .load_any(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        println!("Loaded {count} {kind} records from {}", path.display());
        return Ok(());
    }

    let kind: DatasetKind = dataset.parse()?;
    let path = resolve_input(config, kind, path)?;
    let count = analyser
        .load(kind, &path)
        .with_context(|| format!("loading {kind} data from {}", path.display()))?;
    println!("Loaded {count} {kind} records from {}", path.display());
    Ok(())
}
