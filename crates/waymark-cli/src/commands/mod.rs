// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod locations;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use waymark_lib::{load_dataset, resolve_dataset_path, Dataset};

/// Resolve and load the dataset, warning about edges routing will ignore.
pub fn load_network(explicit: Option<&Path>) -> Result<Dataset> {
    let path = resolve_dataset_path(explicit).context("failed to locate the network dataset")?;
    let dataset = load_dataset(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;

    let issues = dataset.validate();
    if issues > 0 {
        tracing::warn!(issues, path = %path.display(), "dataset contains ignored edges");
    }
    Ok(dataset)
}
