//! Contract between the road-network model and the pathfinding core.

use crate::error::{Error, Result};
use crate::network::{NodeId, Position, RoadNetwork};

/// Operations the route planner needs from a road-network model.
///
/// Implementations own every node; the planner only ever holds [`NodeId`]
/// handles and keeps its per-search scratch state on its own side.
pub trait RoadModel {
    /// Node nearest to a normalised coordinate (`0.0..=1.0` on each axis).
    ///
    /// Must be deterministic for a fixed graph and coordinate.
    fn closest_node(&self, x: f64, y: f64) -> Result<NodeId>;

    /// Nodes adjacent to `node`. Repeated calls return the same set.
    fn neighbours(&self, node: NodeId) -> &[NodeId];

    /// Symmetric, non-negative distance in normalised units; zero exactly
    /// when both nodes share a location.
    fn distance(&self, a: NodeId, b: NodeId) -> f64;

    /// Conversion factor from normalised units to metres.
    fn metric_scale(&self) -> f64;
}

impl RoadModel for RoadNetwork {
    fn closest_node(&self, x: f64, y: f64) -> Result<NodeId> {
        self.index()
            .nearest(Position::new(x, y))
            .map(|(handle, _)| handle)
            .ok_or(Error::EmptyNetwork)
    }

    fn neighbours(&self, node: NodeId) -> &[NodeId] {
        RoadNetwork::neighbours(self, node)
    }

    fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => a.position.distance_to(&b.position),
            _ => f64::INFINITY,
        }
    }

    fn metric_scale(&self) -> f64 {
        RoadNetwork::metric_scale(self)
    }
}
