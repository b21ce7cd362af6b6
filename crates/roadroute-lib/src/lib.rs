//! roadroute library entry points.
//!
//! This crate exposes helpers to locate and load a road network, resolve raw
//! coordinates to graph nodes, and run A* pathfinding over the network.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod model;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod snapshot;
pub mod spatial;

pub use dataset::{default_network_path, load_network, resolve_network_path, NETWORK_ENV_VAR};
pub use error::{Error, Result};
pub use model::RoadModel;
pub use network::{
    ExternalId, NetworkSource, Node, NodeId, Position, Road, RoadKind, RoadNetwork, SourceNode,
    SourceRoad,
};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{AStarSearch, Heuristic, NodeScratch, Route, SearchState};
pub use routing::{plan_route, Coordinate, RouteAlgorithm, RoutePlan, RouteRequest};
pub use snapshot::{load_snapshot, save_snapshot};
pub use spatial::NodeIndex;
