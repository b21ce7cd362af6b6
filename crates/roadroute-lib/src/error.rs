use std::path::PathBuf;

use thiserror::Error;

use crate::network::{ExternalId, NodeId};

/// Convenient result alias for the roadroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Road network file could not be located at the resolved path.
    #[error("road network not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default road network")]
    ProjectDirsUnavailable,

    /// Raised when a nearest-node query runs against a network without routable nodes.
    #[error("road network has no routable nodes")]
    EmptyNetwork,

    /// Raised when a node handle does not belong to the network.
    #[error("unknown node handle {node}")]
    UnknownNode { node: NodeId },

    /// Raised when a network source fails validation.
    #[error("invalid road network: {message}")]
    InvalidNetwork { message: String },

    /// Raised when a road references a node identifier missing from the source.
    #[error("road {road} references unknown node {node}")]
    DanglingNodeReference { road: ExternalId, node: ExternalId },

    /// Raised when a percentage coordinate falls outside `0..=100`.
    #[error("coordinate {axis}={value} is outside the 0-100 range")]
    CoordinateOutOfRange { axis: char, value: f64 },

    /// Raised when the open set empties before the goal is reached.
    #[error("no route found between node {start} and node {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when serializing a network snapshot fails.
    #[error("failed to serialize network snapshot: {message}")]
    SnapshotSerialize { message: String },

    /// Raised when loading a network snapshot from a file fails.
    #[error("failed to load network snapshot from {path}: {message}")]
    SnapshotLoad { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
