//! Route planning facade.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (A*, Dijkstra)
//! - [`Coordinate`] - Validated percentage-of-range endpoint
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```ignore
//! use roadroute_lib::{plan_route, Coordinate, RouteRequest, RoadNetwork};
//!
//! let network = RoadNetwork::from_json_path("town.json".as_ref())?;
//! let request = RouteRequest::a_star(Coordinate::new(10.0, 10.0)?, Coordinate::new(90.0, 90.0)?);
//! let plan = plan_route(&network, &request)?;
//! println!("Route: {} hops, {:.1} m", plan.hop_count(), plan.distance);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RoadModel;
use crate::network::NodeId;
use crate::path::percent_to_fraction;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// A* search (heuristic guided).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Dijkstra's algorithm (uninformed).
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Endpoint expressed as a percentage (`0..=100`) of the network extent on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    x: f64,
    y: f64,
}

impl Coordinate {
    /// Validate and build a coordinate.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        for (axis, value) in [('x', x), ('y', y)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::CoordinateOutOfRange { axis, value });
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    fn resolve(&self, model: &dyn RoadModel) -> Result<NodeId> {
        model.closest_node(percent_to_fraction(self.x), percent_to_fraction(self.y))
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for A* routes.
    pub fn a_star(start: Coordinate, goal: Coordinate) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::AStar,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    /// Total length in metres.
    pub distance: f64,
    /// Nodes taken from the frontier while searching.
    pub expanded: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
pub fn plan_route(model: &dyn RoadModel, request: &RouteRequest) -> Result<RoutePlan> {
    let start = request.start.resolve(model)?;
    let goal = request.goal.resolve(model)?;
    debug!(
        start,
        goal,
        algorithm = %request.algorithm,
        "resolved route endpoints"
    );

    let planner = select_planner(request.algorithm);
    let route = planner.find_route(model, start, goal)?;

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        steps: route.nodes,
        distance: route.distance,
        expanded: route.expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_rejects_out_of_range() {
        let error = Coordinate::new(50.0, 100.5).expect_err("y too large");
        assert!(matches!(
            error,
            Error::CoordinateOutOfRange { axis: 'y', .. }
        ));
        assert!(Coordinate::new(-1.0, 0.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, 100.0).is_ok());
    }

    #[test]
    fn algorithm_display_matches_serde_name() {
        assert_eq!(RouteAlgorithm::AStar.to_string(), "a-star");
        assert_eq!(
            serde_json::to_string(&RouteAlgorithm::AStar).unwrap(),
            "\"a-star\""
        );
        assert_eq!(
            serde_json::to_string(&RouteAlgorithm::Dijkstra).unwrap(),
            "\"dijkstra\""
        );
    }
}
