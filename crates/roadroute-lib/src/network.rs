//! In-memory road network: node arena, roads and adjacency.
//!
//! Nodes are stored in a flat arena and referenced everywhere else through
//! [`NodeId`] handles, so pathfinding never holds owning pointers into the
//! graph. Raw source coordinates are normalised into the unit square using the
//! bounding box of all nodes; the longest bounding-box side becomes the
//! network's metric scale, so `normalised distance * metric_scale` yields
//! metres (or whatever planar unit the source used).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::spatial::NodeIndex;

/// Handle of a node inside a [`RoadNetwork`] arena.
pub type NodeId = usize;

/// Identifier a node or road carries in the source data.
pub type ExternalId = i64;

/// Planar position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Node stored in the network arena with a normalised position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: ExternalId,
    pub position: Position,
}

/// Classification of a road. Footways never carry routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoadKind {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    #[default]
    Residential,
    Service,
    Unclassified,
    Footway,
}

impl RoadKind {
    /// Whether routes may travel along roads of this kind.
    pub fn is_routable(self) -> bool {
        !matches!(self, RoadKind::Footway)
    }
}

/// Road polyline referencing arena nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: ExternalId,
    pub kind: RoadKind,
    pub nodes: Vec<NodeId>,
}

/// Node as described in a network source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub id: ExternalId,
    pub x: f64,
    pub y: f64,
}

/// Road as described in a network source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRoad {
    pub id: ExternalId,
    #[serde(default)]
    pub kind: RoadKind,
    pub nodes: Vec<ExternalId>,
}

/// Raw description of a road network, typically read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSource {
    pub nodes: Vec<SourceNode>,
    pub roads: Vec<SourceRoad>,
}

impl NetworkSource {
    /// Parse a network source from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a network source from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

/// Road network with normalised node positions, adjacency and a nearest-node index.
#[derive(Debug)]
pub struct RoadNetwork {
    nodes: Vec<Node>,
    roads: Vec<Road>,
    adjacency: Vec<Vec<NodeId>>,
    id_to_index: HashMap<ExternalId, NodeId>,
    metric_scale: f64,
    index: NodeIndex,
}

impl RoadNetwork {
    /// Validate a source description, normalise its coordinates and build the network.
    pub fn from_source(source: &NetworkSource) -> Result<Self> {
        let mut id_to_index = HashMap::with_capacity(source.nodes.len());
        for (index, node) in source.nodes.iter().enumerate() {
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(Error::InvalidNetwork {
                    message: format!("node {} has a non-finite coordinate", node.id),
                });
            }
            if id_to_index.insert(node.id, index).is_some() {
                return Err(Error::InvalidNetwork {
                    message: format!("duplicate node id {}", node.id),
                });
            }
        }

        let (min_x, min_y, span) = bounding_box(&source.nodes);
        let nodes = source
            .nodes
            .iter()
            .map(|node| Node {
                id: node.id,
                position: Position::new((node.x - min_x) / span, (node.y - min_y) / span),
            })
            .collect();

        let mut roads = Vec::with_capacity(source.roads.len());
        for road in &source.roads {
            let handles = road
                .nodes
                .iter()
                .map(|id| {
                    id_to_index
                        .get(id)
                        .copied()
                        .ok_or(Error::DanglingNodeReference {
                            road: road.id,
                            node: *id,
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            if handles.len() < 2 {
                warn!(road = road.id, "road has fewer than two nodes; it adds no edges");
            }
            roads.push(Road {
                id: road.id,
                kind: road.kind,
                nodes: handles,
            });
        }

        Ok(Self::from_parts(nodes, roads, span))
    }

    /// Parse and build a network from a JSON source file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading road network source");
        let source = NetworkSource::from_path(path)?;
        Self::from_source(&source)
    }

    /// Assemble a network from already normalised nodes and resolved roads.
    ///
    /// Node handles inside `roads` must be valid indices into `nodes`.
    pub(crate) fn from_parts(nodes: Vec<Node>, roads: Vec<Road>, metric_scale: f64) -> Self {
        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
        let mut routable = vec![false; nodes.len()];

        for road in roads.iter().filter(|road| road.kind.is_routable()) {
            for &node in &road.nodes {
                routable[node] = true;
            }
            for pair in road.nodes.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a == b {
                    continue;
                }
                link(&mut adjacency[a], b);
                link(&mut adjacency[b], a);
            }
        }

        let id_to_index = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id, index))
            .collect();

        let index = NodeIndex::build(
            nodes
                .iter()
                .enumerate()
                .filter(|(handle, _)| routable[*handle])
                .map(|(handle, node)| (handle, node.position)),
        );

        info!(
            nodes = nodes.len(),
            roads = roads.len(),
            routable_nodes = index.len(),
            metric_scale,
            "built road network"
        );

        Self {
            nodes,
            roads,
            adjacency,
            id_to_index,
            metric_scale,
            index,
        }
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Lookup a node by handle.
    pub fn node(&self, handle: NodeId) -> Option<&Node> {
        self.nodes.get(handle)
    }

    /// Lookup a node handle by its source identifier.
    pub fn node_by_external_id(&self, id: ExternalId) -> Option<NodeId> {
        self.id_to_index.get(&id).copied()
    }

    /// Conversion factor from normalised units to metres.
    pub fn metric_scale(&self) -> f64 {
        self.metric_scale
    }

    /// Spatial index over routable nodes.
    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    /// Neighbours of a node; unknown handles have none.
    pub fn neighbours(&self, handle: NodeId) -> &[NodeId] {
        self.adjacency
            .get(handle)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Normalised position of a node.
    pub fn position(&self, handle: NodeId) -> Result<Position> {
        self.nodes
            .get(handle)
            .map(|node| node.position)
            .ok_or(Error::UnknownNode { node: handle })
    }
}

fn link(edges: &mut Vec<NodeId>, target: NodeId) {
    if !edges.contains(&target) {
        edges.push(target);
    }
}

/// Returns `(min_x, min_y, span)` where `span` is the longest side of the
/// bounding box, or `1.0` when every node shares a single location.
fn bounding_box(nodes: &[SourceNode]) -> (f64, f64, f64) {
    if nodes.is_empty() {
        return (0.0, 0.0, 1.0);
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for node in nodes {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x);
        max_y = max_y.max(node.y);
    }

    let span = (max_x - min_x).max(max_y - min_y);
    let span = if span > 0.0 { span } else { 1.0 };
    (min_x, min_y, span)
}
