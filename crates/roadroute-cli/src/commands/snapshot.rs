use std::path::Path;

use anyhow::{Context, Result};
use roadroute_lib::save_snapshot;

/// Handle the snapshot subcommand.
pub fn handle_snapshot_command(network_path: Option<&Path>, output: &Path) -> Result<()> {
    let network = super::open_network(network_path)?;
    save_snapshot(&network, output)
        .with_context(|| format!("failed to write snapshot to {}", output.display()))?;
    println!(
        "Snapshot with {} nodes written to {}",
        network.len(),
        output.display()
    );
    Ok(())
}
