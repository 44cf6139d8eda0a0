use std::fs;

use anyhow::{Context, Result, bail};
use shared::config::ClientConfig;

/// Writes `cauhec.yaml` or `cauhec.json` with the default settings to the
/// current directory.
pub fn generate_config(format: &str) -> Result<()> {
    let config = ClientConfig::with_defaults();
    let (file_name, serialized) = match format {
        "yaml" => ("cauhec.yaml", serde_yml::to_string(&config)?),
        "json" => ("cauhec.json", serde_json::to_string_pretty(&config)?),
        other => bail!("unsupported format `{other}`; use yaml or json"),
    };

    fs::write(file_name, serialized)
        .with_context(|| format!("failed to write {file_name}"))?;
    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
