//! Capability traits used across storage, wrappers, and algorithms.

use crate::core::{EdgeId, NodeId, Position};
use std::{fmt::Debug, hash::Hash};

/// Minimal read-only graph trait for storage and wrappers.
///
/// Analysis code is generic over this trait plus [`EdgeWeights`]; it never
/// mutates the graph it is handed.
pub trait GraphBase {
    type Key: Debug + Clone + Eq + Hash;

    fn order(&self) -> usize;
    fn size(&self) -> usize;

    fn node_id(&self, key: &Self::Key) -> Option<NodeId>;
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;
    fn node_key(&self, id: NodeId) -> &Self::Key;
    fn position(&self, id: NodeId) -> Position;

    fn edge_ids(&self) -> Box<dyn Iterator<Item = EdgeId> + '_>;
    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId);

    /// All edges incident to `v`, as (other endpoint, edge id) pairs.
    ///
    /// Storage is symmetric: every undirected edge shows up in the incidence
    /// list of both endpoints, so relaxation never special-cases direction.
    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_>;
}

/// Edge weight lookup. Every edge in this domain carries a weight (the
/// truncated Euclidean distance between its endpoints).
pub trait EdgeWeights {
    fn weight_of(&self, e: EdgeId) -> f64;
}

/// Construction-phase mutation. Once a graph is handed to analysis it is
/// treated as read-only.
pub trait MutableStorage: GraphBase {
    fn with_node_capacity(capacity: usize) -> Self;
    fn add_node(&mut self, key: Self::Key, position: Position) -> NodeId;
    fn add_edge_by_id(&mut self, a: NodeId, b: NodeId, weight: f64) -> EdgeId;
}
