//! KD-tree index answering nearest-node queries over routable nodes.
//!
//! The index is 2-dimensional and works in the network's normalised space.
//! Only nodes lying on at least one routable road are indexed, so a query
//! never snaps onto a node that is reachable exclusively through footways.
//!
//! Street grids put many nodes on the same x or y value, so the index uses
//! kiddo's immutable tree, which has no per-bucket limit on shared axis
//! values. It is rebuilt whenever a network is assembled.

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use tracing::debug;

use crate::network::{NodeId, Position};

/// Nearest-neighbour index over node positions.
pub struct NodeIndex {
    /// `None` when no node is indexed.
    tree: Option<ImmutableKdTree<f64, 2>>,
    /// Tree item -> node handle.
    handles: Vec<NodeId>,
}

impl NodeIndex {
    /// Build an index from `(handle, position)` pairs.
    pub fn build(entries: impl IntoIterator<Item = (NodeId, Position)>) -> Self {
        let (handles, points): (Vec<NodeId>, Vec<[f64; 2]>) = entries
            .into_iter()
            .map(|(handle, position)| (handle, [position.x, position.y]))
            .unzip();

        let tree = if points.is_empty() {
            None
        } else {
            Some(ImmutableKdTree::new_from_slice(&points))
        };

        debug!(node_count = handles.len(), "built node index");
        Self { tree, handles }
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Find the node closest to `position`, with its distance.
    pub fn nearest(&self, position: Position) -> Option<(NodeId, f64)> {
        let tree = self.tree.as_ref()?;
        let neighbour = tree.nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        let handle = usize::try_from(neighbour.item)
            .ok()
            .and_then(|item| self.handles.get(item))?;
        Some((*handle, neighbour.distance.sqrt()))
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeIndex")
            .field("node_count", &self.handles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> NodeIndex {
        NodeIndex::build([
            (4, Position::new(0.0, 0.0)),
            (5, Position::new(1.0, 0.0)),
            (6, Position::new(0.0, 1.0)),
            (7, Position::new(1.0, 1.0)),
        ])
    }

    #[test]
    fn nearest_snaps_to_closest_corner() {
        let index = grid();
        let (handle, distance) = index.nearest(Position::new(0.9, 0.8)).unwrap();
        assert_eq!(handle, 7);
        assert!((distance - (0.01f64 + 0.04).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn many_nodes_on_one_axis_are_indexed() {
        let column: Vec<_> = (0..200)
            .map(|row| (row, Position::new(0.5, row as f64 / 200.0)))
            .collect();
        let index = NodeIndex::build(column);

        assert_eq!(index.len(), 200);
        let (handle, _) = index.nearest(Position::new(0.4, 0.5)).unwrap();
        assert_eq!(handle, 100);
    }

    #[test]
    fn empty_index_has_no_nearest() {
        let index = NodeIndex::build(std::iter::empty());
        assert!(index.is_empty());
        assert!(index.nearest(Position::new(0.5, 0.5)).is_none());
    }
}
