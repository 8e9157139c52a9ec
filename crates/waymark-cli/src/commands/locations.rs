//! Locations command handler.

use std::path::Path;

use anyhow::Result;

use waymark_cli::output::{render_locations, OutputFormat};
use waymark_lib::LocationIndex;

use super::load_network;

/// Print every location, or the closest names to `search` when given.
pub fn handle_locations_command(
    dataset_path: Option<&Path>,
    format: OutputFormat,
    search: Option<&str>,
) -> Result<()> {
    let dataset = load_network(dataset_path)?;

    let selected = match search {
        None => dataset.locations.clone(),
        Some(term) => {
            let index = LocationIndex::new(&dataset.locations);
            index
                .suggest(term, dataset.locations.len())
                .iter()
                .filter_map(|name| index.position_by_name(name))
                .filter_map(|position| index.location(position).cloned())
                .collect()
        }
    };

    print!("{}", render_locations(&selected, format)?);
    Ok(())
}
