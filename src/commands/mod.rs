//! Command handlers module.
//!
//! - `load.rs`: load a dataset and report its count
//! - `sort.rs`: sort a dataset and print or persist the JSON projection
//! - `config.rs`: configuration display command

mod config;
mod load;
mod sort;

pub use config::cmd_config;
pub use load::cmd_load;
pub use sort::{SortArgs, cmd_sort};

use std::path::PathBuf;

use census_analyser::config::AnalyserConfig;
use census_analyser::{DatasetKind, Error};

/// Picks the explicit path or falls back to the configured one for `kind`.
fn resolve_input(
    config: &AnalyserConfig,
    kind: DatasetKind,
    path: Option<PathBuf>,
) -> Result<PathBuf, Error> {
    let configured = match kind {
        DatasetKind::Census => config.census_path.clone(),
        DatasetKind::StateCode => config.state_code_path.clone(),
    };
    path.or(configured).ok_or_else(|| {
        Error::InvalidInput(format!(
            "No {kind} file given and none configured (set CENSUS_ANALYSER_{}_PATH)",
            match kind {
                DatasetKind::Census => "CENSUS",
                DatasetKind::StateCode => "STATE_CODE",
            }
        ))
    })
}
