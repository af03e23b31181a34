//! UndirectedGraph wrapper over a storage representation S.
//!
//! The wrapper enforces the simple-graph construction invariants (no
//! self-loops, at most one edge per unordered pair, non-negative weights)
//! and delegates all read access to the underlying storage. Analysis code
//! takes `GraphBase + EdgeWeights` bounds and works on the wrapper and on
//! bare storage alike.

use crate::core::{EdgeId, NodeId, Position};
use crate::error::{GraphError, Result};
use crate::storage::AdjacencyList;
use crate::traits::{EdgeWeights, GraphBase, MutableStorage};

/// The graph type produced by the proximity builder.
pub type ProximityGraph<K> = UndirectedGraph<AdjacencyList<K>>;

#[derive(Clone, Debug)]
pub struct UndirectedGraph<S>
where
    S: MutableStorage,
{
    pub storage: S,
}

impl<S> UndirectedGraph<S>
where
    S: MutableStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn add_node(&mut self, key: S::Key, position: Position) -> NodeId {
        self.storage.add_node(key, position)
    }

    /// Checked edge insertion enforcing the simple-graph invariants.
    pub fn add_edge_checked(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<EdgeId> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        if self.storage.neighbors(a).any(|(other, _)| other == b) {
            return Err(GraphError::ParallelEdge);
        }
        Ok(self.storage.add_edge_by_id(a, b, weight))
    }

    /// Build a graph holding only isolated nodes; edges come later.
    pub fn from_points<NI>(points: NI) -> Self
    where
        NI: IntoIterator<Item = (S::Key, f64, f64)>,
    {
        let points = Vec::from_iter(points);
        let mut storage = S::with_node_capacity(points.len());
        for (key, x, y) in points {
            storage.add_node(key, Position::new(x, y));
        }
        Self::new(storage)
    }

    /// Build a graph directly from weighted edges; nodes are interned on
    /// first mention at position (0, 0). Intended for tests and callers that
    /// already know their edge set.
    pub fn from_weighted_edges<EI>(edges: EI) -> Result<Self>
    where
        EI: IntoIterator<Item = (S::Key, S::Key, f64)>,
    {
        let mut graph = Self::new(S::with_node_capacity(0));
        for (a_key, b_key, weight) in edges {
            let a = graph.storage.add_node(a_key, Position::new(0.0, 0.0));
            let b = graph.storage.add_node(b_key, Position::new(0.0, 0.0));
            graph.add_edge_checked(a, b, weight)?;
        }
        Ok(graph)
    }
}

impl<S> GraphBase for UndirectedGraph<S>
where
    S: MutableStorage,
{
    type Key = S::Key;

    fn order(&self) -> usize {
        self.storage.order()
    }
    fn size(&self) -> usize {
        self.storage.size()
    }

    fn node_id(&self, key: &Self::Key) -> Option<NodeId> {
        self.storage.node_id(key)
    }
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        self.storage.node_ids()
    }
    fn node_key(&self, id: NodeId) -> &Self::Key {
        self.storage.node_key(id)
    }
    fn position(&self, id: NodeId) -> Position {
        self.storage.position(id)
    }

    fn edge_ids(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.storage.edge_ids()
    }
    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        self.storage.endpoints(e)
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        self.storage.neighbors(v)
    }
}

impl<S> EdgeWeights for UndirectedGraph<S>
where
    S: MutableStorage + EdgeWeights,
{
    fn weight_of(&self, e: EdgeId) -> f64 {
        self.storage.weight_of(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_are_rejected() {
        let mut graph: ProximityGraph<&str> = UndirectedGraph::from_points([("a", 0.0, 0.0)]);
        let a = graph.node_id(&"a").unwrap();
        assert_eq!(graph.add_edge_checked(a, a, 0.0), Err(GraphError::SelfLoop));
    }

    #[test]
    fn parallel_edges_are_rejected_in_either_direction() {
        let mut graph: ProximityGraph<&str> =
            UndirectedGraph::from_points([("a", 0.0, 0.0), ("b", 1.0, 0.0)]);
        let a = graph.node_id(&"a").unwrap();
        let b = graph.node_id(&"b").unwrap();
        graph.add_edge_checked(a, b, 1.0).unwrap();
        assert_eq!(
            graph.add_edge_checked(a, b, 1.0),
            Err(GraphError::ParallelEdge)
        );
        assert_eq!(
            graph.add_edge_checked(b, a, 1.0),
            Err(GraphError::ParallelEdge)
        );
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut graph: ProximityGraph<&str> =
            UndirectedGraph::from_points([("a", 0.0, 0.0), ("b", 1.0, 0.0)]);
        let a = graph.node_id(&"a").unwrap();
        let b = graph.node_id(&"b").unwrap();
        assert_eq!(
            graph.add_edge_checked(a, b, -1.0),
            Err(GraphError::NegativeWeight(-1.0))
        );
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let mut graph: ProximityGraph<&str> =
            UndirectedGraph::from_points([("a", 0.5, 0.5), ("b", 0.5, 0.5)]);
        let a = graph.node_id(&"a").unwrap();
        let b = graph.node_id(&"b").unwrap();
        assert!(graph.add_edge_checked(a, b, 0.0).is_ok());
    }

    #[test]
    fn from_weighted_edges_interns_on_first_mention() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("a", "b", 1.0), ("b", "c", 2.0)]).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
    }
}
