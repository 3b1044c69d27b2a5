//! Config command handler.

use anyhow::Context;
use census_analyser::config::AnalyserConfig;

/// Prints the effective configuration as TOML.
pub fn cmd_config(config: &AnalyserConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(config).context("rendering configuration")?;

    println!("# Effective configuration");
    match AnalyserConfig::default_path() {
        Some(path) => println!("# Default config file: {}", path.display()),
        None => println!("# Default config file: (unavailable on this platform)"),
    }
    println!();
    print!("{rendered}");
    Ok(())
}
