use std::path::Path;

use anyhow::{Context, Result};
use roadroute_lib::path::percent_to_fraction;
use roadroute_lib::{Coordinate, Error, RoadModel};

/// Handle the nearest subcommand.
pub fn handle_nearest_command(network_path: Option<&Path>, at: Coordinate) -> Result<()> {
    let network = super::open_network(network_path)?;

    let handle = network
        .closest_node(percent_to_fraction(at.x()), percent_to_fraction(at.y()))
        .context("nearest-node lookup failed")?;
    let node = network
        .node(handle)
        .ok_or(Error::UnknownNode { node: handle })?;

    println!(
        "Closest node: {} at ({:.2}, {:.2})",
        node.id,
        node.position.x * 100.0,
        node.position.y * 100.0
    );
    Ok(())
}
