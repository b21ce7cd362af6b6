//! A* search over a [`RoadModel`].
//!
//! The search keeps every piece of per-node scratch (`g`, `h`, visited,
//! parent) in a side table keyed by [`NodeId`], so the model itself is never
//! mutated and may be shared by any number of searches. The open set is a
//! binary heap ordered by `f = g + h`; ties go to the lower `h`, then to the
//! entry pushed first.
//!
//! Unlike a plain "overwrite on discovery" expansion, neighbours that were
//! already expanded are skipped and open neighbours are only updated when a
//! strictly cheaper path reaches them. Superseded heap entries are dropped
//! lazily when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RoadModel;
use crate::network::NodeId;

/// Factor turning a `0..=100` percentage into the model's `0..=1` space.
const PERCENT: f64 = 0.01;

/// Convert a percentage-of-range coordinate into a normalised one.
pub fn percent_to_fraction(value: f64) -> f64 {
    value * PERCENT
}

/// Remaining-cost estimate used to rank the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Straight-line distance to the goal (A*).
    #[default]
    StraightLine,
    /// Always zero, which degrades the search to Dijkstra's algorithm.
    Zero,
}

/// Lifecycle of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Open set empty, start not seeded yet.
    Initial,
    /// Nodes are being expanded.
    Running,
    /// The goal was taken from the frontier.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// Per-node scratch kept for the duration of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeScratch {
    /// Cost from the start along the best path found so far.
    pub g_value: f64,
    /// Heuristic estimate to the goal, fixed at first discovery.
    pub h_value: f64,
    /// Added to the open set at least once.
    pub visited: bool,
    /// Removed from the open set and expanded.
    pub expanded: bool,
    /// Predecessor on the best known path.
    pub parent: Option<NodeId>,
}

/// Path produced by a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Node handles from start to goal, inclusive.
    pub nodes: Vec<NodeId>,
    /// Total length in metres.
    pub distance: f64,
    /// Total length in the model's normalised units.
    pub raw_distance: f64,
    /// Number of nodes taken from the frontier.
    pub expanded: usize,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// A* search bound to a model and a pair of endpoints.
pub struct AStarSearch<'a, M: RoadModel + ?Sized> {
    model: &'a M,
    start_node: NodeId,
    end_node: NodeId,
    heuristic: Heuristic,
    scratch: HashMap<NodeId, NodeScratch>,
    open_list: BinaryHeap<OpenEntry>,
    sequence: u64,
    expanded: usize,
    state: SearchState,
}

impl<'a, M: RoadModel + ?Sized> AStarSearch<'a, M> {
    /// Resolve two percentage coordinates (`0..=100` per axis) to their
    /// closest nodes. No traversal happens until [`AStarSearch::search`].
    pub fn new(model: &'a M, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<Self> {
        let start_node =
            model.closest_node(percent_to_fraction(start_x), percent_to_fraction(start_y))?;
        let end_node = model.closest_node(percent_to_fraction(end_x), percent_to_fraction(end_y))?;
        Ok(Self::between(model, start_node, end_node))
    }

    /// Bind a search to already resolved endpoints.
    pub fn between(model: &'a M, start_node: NodeId, end_node: NodeId) -> Self {
        Self {
            model,
            start_node,
            end_node,
            heuristic: Heuristic::default(),
            scratch: HashMap::new(),
            open_list: BinaryHeap::new(),
            sequence: 0,
            expanded: 0,
            state: SearchState::Initial,
        }
    }

    /// Replace the heuristic used to rank the frontier.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Scratch recorded for a node during the last search, if it was discovered.
    pub fn scratch(&self, node: NodeId) -> Option<&NodeScratch> {
        self.scratch.get(&node)
    }

    /// Number of entries currently held by the open set.
    pub fn open_len(&self) -> usize {
        self.open_list.len()
    }

    /// Heuristic estimate from `node` to the goal in normalised units.
    pub fn calculate_h_value(&self, node: NodeId) -> f64 {
        match self.heuristic {
            Heuristic::StraightLine => self.model.distance(node, self.end_node),
            Heuristic::Zero => 0.0,
        }
    }

    /// Run the search to completion.
    ///
    /// Scratch from a previous run is discarded first, so calling this twice
    /// yields the same route.
    pub fn search(&mut self) -> Result<Route> {
        self.reset();
        self.seed();

        while let Some(current) = self.next_node() {
            if self.model.distance(current, self.end_node) == 0.0 {
                self.state = SearchState::Found;
                self.open_list.clear();
                let route = self.construct_final_path(current)?;
                debug!(
                    start = self.start_node,
                    goal = self.end_node,
                    hops = route.hop_count(),
                    expanded = route.expanded,
                    distance = route.distance,
                    "route found"
                );
                return Ok(route);
            }

            self.add_neighbours(current);
        }

        self.state = SearchState::Exhausted;
        debug!(
            start = self.start_node,
            goal = self.end_node,
            expanded = self.expanded,
            "open set exhausted before reaching goal"
        );
        Err(Error::RouteNotFound {
            start: self.start_node,
            goal: self.end_node,
        })
    }

    fn reset(&mut self) {
        self.scratch.clear();
        self.open_list.clear();
        self.sequence = 0;
        self.expanded = 0;
        self.state = SearchState::Initial;
    }

    fn seed(&mut self) {
        let h_value = self.calculate_h_value(self.start_node);
        self.scratch.insert(
            self.start_node,
            NodeScratch {
                g_value: 0.0,
                h_value,
                visited: true,
                expanded: false,
                parent: None,
            },
        );
        self.push_open(self.start_node, 0.0, h_value);
        self.state = SearchState::Running;
    }

    fn push_open(&mut self, node: NodeId, g_value: f64, h_value: f64) {
        self.open_list
            .push(OpenEntry::new(node, g_value, h_value, self.sequence));
        self.sequence += 1;
    }

    fn add_neighbours(&mut self, current: NodeId) {
        let model = self.model;
        let current_g = self
            .scratch
            .get(&current)
            .map(|entry| entry.g_value)
            .unwrap_or(0.0);

        for &neighbour in model.neighbours(current) {
            let known = self.scratch.get(&neighbour).copied();
            if known.is_some_and(|entry| entry.expanded) {
                continue;
            }

            let tentative_g = current_g + model.distance(current, neighbour);
            let h_value = match known {
                Some(entry) if entry.visited => {
                    if tentative_g >= entry.g_value {
                        continue;
                    }
                    entry.h_value
                }
                _ => self.calculate_h_value(neighbour),
            };

            self.scratch.insert(
                neighbour,
                NodeScratch {
                    g_value: tentative_g,
                    h_value,
                    visited: true,
                    expanded: false,
                    parent: Some(current),
                },
            );
            self.push_open(neighbour, tentative_g, h_value);
        }
    }

    fn next_node(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open_list.pop() {
            let Some(scratch) = self.scratch.get_mut(&entry.node) else {
                continue;
            };
            // Superseded by a cheaper push, or already expanded.
            if scratch.expanded || entry.g_value.0 > scratch.g_value {
                continue;
            }

            scratch.expanded = true;
            self.expanded += 1;
            return Some(entry.node);
        }
        None
    }

    fn construct_final_path(&self, goal: NodeId) -> Result<Route> {
        let mut raw_distance = 0.0;
        let mut nodes = Vec::new();
        let mut current = goal;

        while current != self.start_node {
            let Some(parent) = self.scratch.get(&current).and_then(|entry| entry.parent) else {
                return Err(Error::RouteNotFound {
                    start: self.start_node,
                    goal: self.end_node,
                });
            };
            nodes.push(current);
            raw_distance += self.model.distance(current, parent);
            current = parent;
        }
        nodes.push(self.start_node);
        nodes.reverse();

        Ok(Route {
            nodes,
            distance: raw_distance * self.model.metric_scale(),
            raw_distance,
            expanded: self.expanded,
        })
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct OpenEntry {
    node: NodeId,
    g_value: FloatOrd,
    h_value: FloatOrd,
    f_score: FloatOrd,
    sequence: u64,
}

impl OpenEntry {
    fn new(node: NodeId, g_value: f64, h_value: f64, sequence: u64) -> Self {
        Self {
            node,
            g_value: FloatOrd(g_value),
            h_value: FloatOrd(h_value),
            f_score: FloatOrd(g_value + h_value),
            sequence,
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f, then h, then age.
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.h_value.cmp(&self.h_value))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
