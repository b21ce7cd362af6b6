//! Route planning strategies.
//!
//! Each algorithm is wrapped in a type implementing [`RoutePlanner`], so the
//! `plan_route` orchestrator stays the same when a new strategy is added.

use crate::error::Result;
use crate::model::RoadModel;
use crate::network::NodeId;
use crate::path::{AStarSearch, Heuristic, Route};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search between two resolved nodes.
    ///
    /// Returns [`crate::Error::RouteNotFound`] when the goal is unreachable.
    fn find_route(&self, model: &dyn RoadModel, start: NodeId, goal: NodeId) -> Result<Route>;
}

/// A* planner guided by the straight-line distance to the goal.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_route(&self, model: &dyn RoadModel, start: NodeId, goal: NodeId) -> Result<Route> {
        AStarSearch::between(model, start, goal).search()
    }
}

/// Dijkstra planner: the same search with a zero heuristic.
///
/// Expands more nodes than A* but is handy for cross-checking its results.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_route(&self, model: &dyn RoadModel, start: NodeId, goal: NodeId) -> Result<Route> {
        AStarSearch::between(model, start, goal)
            .with_heuristic(Heuristic::Zero)
            .search()
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
