// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing.

pub mod nearest;
pub mod route;
pub mod snapshot;

use std::path::Path;

use anyhow::{Context, Result};
use roadroute_lib::{load_network, resolve_network_path, RoadNetwork};

/// Resolve and load the road network shared by every subcommand.
fn open_network(explicit: Option<&Path>) -> Result<RoadNetwork> {
    let path = resolve_network_path(explicit).context("failed to locate the road network")?;
    load_network(&path)
        .with_context(|| format!("failed to load road network from {}", path.display()))
}
