//! Binary snapshots of a [`RoadNetwork`].
//!
//! A snapshot stores the already normalised network so that it can be loaded
//! without re-validating a JSON source. Adjacency and the node index are
//! rebuilt on load.
//!
//! # Format
//!
//! ```text
//! Header (16 bytes):
//!   - Magic: b"RRNS" (4 bytes)
//!   - Version: u8 (1 byte)
//!   - Flags: u8 (1 byte) - bit 0: has_footways
//!   - Node count: u32 (4 bytes)
//!   - Reserved: 6 bytes
//!
//! Body:
//!   - postcard-serialized { metric_scale, nodes, roads }
//!   - zstd compressed
//!
//! Footer (32 bytes):
//!   - SHA-256 checksum of compressed body
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::network::{Node, Road, RoadKind, RoadNetwork};

/// Magic bytes identifying a network snapshot file.
const SNAPSHOT_MAGIC: &[u8; 4] = b"RRNS";

/// Current snapshot format version.
const SNAPSHOT_VERSION: u8 = 1;

/// Flag: network contains footways.
const FLAG_HAS_FOOTWAYS: u8 = 0x01;

/// Header size in bytes.
const HEADER_SIZE: usize = 16;

/// Checksum size in bytes (SHA-256).
const CHECKSUM_SIZE: usize = 32;

/// zstd compression level (balanced speed/ratio).
const COMPRESSION_LEVEL: i32 = 3;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    metric_scale: f64,
    nodes: &'a [Node],
    roads: &'a [Road],
}

#[derive(Deserialize)]
struct SnapshotBody {
    metric_scale: f64,
    nodes: Vec<Node>,
    roads: Vec<Road>,
}

/// Serialize a network snapshot to a file.
pub fn save_snapshot(network: &RoadNetwork, path: &Path) -> Result<()> {
    info!(
        path = %path.display(),
        nodes = network.len(),
        "saving network snapshot"
    );

    let body = SnapshotRef {
        metric_scale: network.metric_scale(),
        nodes: network.nodes(),
        roads: network.roads(),
    };
    let serialized = postcard::to_allocvec(&body).map_err(|e| Error::SnapshotSerialize {
        message: format!("postcard serialization failed: {}", e),
    })?;

    let compressed = zstd::encode_all(serialized.as_slice(), COMPRESSION_LEVEL).map_err(|e| {
        Error::SnapshotSerialize {
            message: format!("zstd compression failed: {}", e),
        }
    })?;

    let checksum = Sha256::digest(&compressed);

    let has_footways = network
        .roads()
        .iter()
        .any(|road| road.kind == RoadKind::Footway);
    let flags = if has_footways { FLAG_HAS_FOOTWAYS } else { 0 };
    let node_count = u32::try_from(network.len()).map_err(|_| Error::SnapshotSerialize {
        message: format!("{} nodes exceed the snapshot limit", network.len()),
    })?;

    let mut header = [0u8; HEADER_SIZE];
    header[0..4].copy_from_slice(SNAPSHOT_MAGIC);
    header[4] = SNAPSHOT_VERSION;
    header[5] = flags;
    header[6..10].copy_from_slice(&node_count.to_le_bytes());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&header)?;
    writer.write_all(&compressed)?;
    writer.write_all(&checksum)?;
    writer.flush()?;

    info!(
        file_size = HEADER_SIZE + compressed.len() + CHECKSUM_SIZE,
        compressed_size = compressed.len(),
        "network snapshot saved"
    );
    Ok(())
}

/// Load a network snapshot, verifying header and checksum.
pub fn load_snapshot(path: &Path) -> Result<RoadNetwork> {
    debug!(path = %path.display(), "loading network snapshot");
    let load_error = |message: String| Error::SnapshotLoad {
        path: path.to_path_buf(),
        message,
    };

    let bytes =
        std::fs::read(path).map_err(|e| load_error(format!("failed to read file: {}", e)))?;
    if bytes.len() < HEADER_SIZE + CHECKSUM_SIZE {
        return Err(load_error(format!("file too short ({} bytes)", bytes.len())));
    }

    let (header, rest) = bytes.split_at(HEADER_SIZE);
    let (compressed, stored_checksum) = rest.split_at(rest.len() - CHECKSUM_SIZE);

    if &header[0..4] != SNAPSHOT_MAGIC {
        return Err(load_error("invalid magic bytes".to_string()));
    }

    let version = header[4];
    if version != SNAPSHOT_VERSION {
        return Err(load_error(format!(
            "unsupported version {} (expected {})",
            version, SNAPSHOT_VERSION
        )));
    }

    let node_count = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);

    let computed_checksum = Sha256::digest(compressed);
    if computed_checksum.as_slice() != stored_checksum {
        return Err(load_error(
            "checksum mismatch - file may be corrupted".to_string(),
        ));
    }

    let decompressed = zstd::decode_all(compressed)
        .map_err(|e| load_error(format!("zstd decompression failed: {}", e)))?;
    let body: SnapshotBody = postcard::from_bytes(&decompressed)
        .map_err(|e| load_error(format!("postcard deserialization failed: {}", e)))?;

    if body.nodes.len() != node_count as usize {
        warn!(
            expected = node_count,
            actual = body.nodes.len(),
            "node count mismatch in network snapshot"
        );
    }

    if !(body.metric_scale.is_finite() && body.metric_scale > 0.0) {
        return Err(load_error(format!(
            "invalid metric scale {}",
            body.metric_scale
        )));
    }

    if let Some(road) = body
        .roads
        .iter()
        .find(|road| road.nodes.iter().any(|&node| node >= body.nodes.len()))
    {
        return Err(load_error(format!(
            "road {} references a node outside the snapshot",
            road.id
        )));
    }

    Ok(RoadNetwork::from_parts(
        body.nodes,
        body.roads,
        body.metric_scale,
    ))
}
