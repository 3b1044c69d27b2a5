//! Sort command handler.

use std::path::PathBuf;

use anyhow::Context;
use census_analyser::config::AnalyserConfig;
use census_analyser::{CensusAnalyser, DatasetKind, JsonStyle, SortDirection, SortField};
use clap::Args;

use super::resolve_input;

/// Arguments of the `sort` command.
#[derive(Args)]
pub struct SortArgs {
    /// Dataset: census or state-codes.
    dataset: String,

    /// Field: state, population, density, area (census); code, name (state codes).
    #[arg(short, long)]
    field: String,

    /// Direction: asc or desc (defaults to the field's natural order).
    #[arg(short, long)]
    direction: Option<String>,

    /// Input file (defaults to the configured path for the dataset).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also write the JSON to this file, replacing its content.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

/// Loads, sorts and prints a dataset.
pub fn cmd_sort(mut config: AnalyserConfig, args: SortArgs) -> anyhow::Result<()> {
    let kind: DatasetKind = args.dataset.parse()?;
    let field = SortField::parse(kind, &args.field)?;
    let direction = match args.direction.as_deref() {
        Some(direction) => direction.parse::<SortDirection>()?,
        None => field.natural_direction(),
    };
    if args.pretty {
        config.json_style = JsonStyle::Pretty;
    }

    let input = resolve_input(&config, kind, args.input)?;
    let mut analyser = CensusAnalyser::new(&config);
    analyser
        .load(kind, &input)
        .with_context(|| format!("loading {kind} data from {}", input.display()))?;

    let json = analyser
        .sort_and_export(field, direction, args.output.as_deref())
        .with_context(|| format!("sorting {field} {direction}"))?;
    println!("{json}");
    Ok(())
}
