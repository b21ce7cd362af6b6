use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::RoadNetwork;
use crate::snapshot::load_snapshot;

/// Default filename for the road network source.
const NETWORK_FILENAME: &str = "network.json";

/// Environment variable overriding the network location.
pub const NETWORK_ENV_VAR: &str = "ROADROUTE_NETWORK";

/// Extension marking binary network snapshots.
const SNAPSHOT_EXTENSION: &str = "bin";

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "roadroute", "roadroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Resolve which network file to load.
///
/// Resolution order:
/// 1. `explicit` path (a directory resolves to `network.json` inside it).
/// 2. `ROADROUTE_NETWORK` environment variable.
/// 3. [`default_network_path`].
///
/// Fails with [`Error::NetworkNotFound`] when the resolved file is missing.
pub fn resolve_network_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = explicit {
        canonical_network_path(explicit)
    } else if let Some(env_path) = env::var_os(NETWORK_ENV_VAR) {
        canonical_network_path(Path::new(&env_path))
    } else {
        default_network_path()?
    };

    if !resolved.is_file() {
        return Err(Error::NetworkNotFound { path: resolved });
    }
    debug!(path = %resolved.display(), "resolved road network path");
    Ok(resolved)
}

/// Load a network file, choosing the snapshot reader for `.bin` files and
/// the JSON reader otherwise.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let network = if is_snapshot(path) {
        load_snapshot(path)?
    } else {
        RoadNetwork::from_json_path(path)?
    };
    info!(
        path = %path.display(),
        nodes = network.len(),
        "road network loaded"
    );
    Ok(network)
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == SNAPSHOT_EXTENSION)
}

fn canonical_network_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(NETWORK_FILENAME);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_resolves_to_default_filename() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join(NETWORK_FILENAME);
        std::fs::write(&file, r#"{"nodes":[],"roads":[]}"#).unwrap();

        let resolved = resolve_network_path(Some(dir.path())).expect("file exists");
        assert_eq!(resolved, file);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nowhere.json");

        let error = resolve_network_path(Some(&missing)).expect_err("missing");
        assert!(matches!(error, Error::NetworkNotFound { path } if path == missing));
    }

    #[test]
    fn snapshot_detection_uses_extension() {
        assert!(is_snapshot(Path::new("town.bin")));
        assert!(!is_snapshot(Path::new("town.json")));
        assert!(!is_snapshot(Path::new("town")));
    }
}
