//! Route command handler for computing paths between two points.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use roadroute_lib::{plan_route, Coordinate, RouteRequest, RouteSummary};

use roadroute_cli::args::AlgorithmArg;
use roadroute_cli::output::{render_summary, OutputFormat};

/// Handle the route subcommand.
pub fn handle_route_command(
    network_path: Option<&Path>,
    from: Coordinate,
    to: Coordinate,
    algorithm: AlgorithmArg,
    format: OutputFormat,
) -> Result<()> {
    let network = super::open_network(network_path)?;

    let request = RouteRequest::a_star(from, to).with_algorithm(algorithm.into());
    let plan = plan_route(&network, &request).context("route planning failed")?;
    let summary = RouteSummary::from_plan(&network, &plan)?;

    let rendered = render_summary(&summary, format)?;
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write route")?;
    Ok(())
}
