//! AdjacencyList: symmetric incidence-list storage for undirected weighted
//! graphs. Each edge is stored once; its id appears in the incidence list of
//! both endpoints, so `neighbors` exposes every incident edge from either
//! side without duplicating edge records.

use crate::core::{EdgeId, NodeId, Position};
use crate::interner::NodeInterner;
use crate::traits::{EdgeWeights, GraphBase, MutableStorage};
use std::fmt::Debug;
use std::hash::Hash;

/// Unordered endpoint pair plus weight. `a`/`b` record insertion order only;
/// the edge itself has no direction.
#[derive(Clone, Debug)]
pub struct EdgeRecord {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(a: NodeId, b: NodeId, weight: f64) -> Self {
        EdgeRecord { a, b, weight }
    }

    /// The endpoint opposite to `v`. `v` must be one of the endpoints.
    pub fn other(&self, v: NodeId) -> NodeId {
        if self.a == v { self.b } else { self.a }
    }
}

#[derive(Clone, Debug)]
pub struct AdjacencyList<K = String>
where
    K: Debug + Clone + Eq + Hash,
{
    pub nodes: NodeInterner<K>,
    pub edges: Vec<EdgeRecord>,
    pub adj: Vec<Vec<EdgeId>>,
}

impl<K> AdjacencyList<K>
where
    K: Debug + Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            nodes: NodeInterner::new(),
            edges: Vec::new(),
            adj: Vec::new(),
        }
    }
}

impl<K> GraphBase for AdjacencyList<K>
where
    K: Debug + Clone + Eq + Hash,
{
    type Key = K;

    fn order(&self) -> usize {
        self.nodes.len()
    }
    fn size(&self) -> usize {
        self.edges.len()
    }

    fn node_id(&self, key: &Self::Key) -> Option<NodeId> {
        self.nodes.get_id(key)
    }
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new((0..self.nodes.len()).map(NodeId))
    }
    fn node_key(&self, id: NodeId) -> &Self::Key {
        &self.nodes.get(id).key
    }
    fn position(&self, id: NodeId) -> Position {
        self.nodes.get(id).position
    }

    fn edge_ids(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new((0..self.edges.len()).map(EdgeId))
    }
    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        let r = &self.edges[e.0];
        (r.a, r.b)
    }

    fn neighbors(&self, v: NodeId) -> Box<dyn Iterator<Item = (NodeId, EdgeId)> + '_> {
        if v.0 >= self.adj.len() {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.adj[v.0]
                .iter()
                .map(move |&eid| (self.edges[eid.0].other(v), eid)),
        )
    }
}

impl<K> EdgeWeights for AdjacencyList<K>
where
    K: Debug + Clone + Eq + Hash,
{
    fn weight_of(&self, e: EdgeId) -> f64 {
        self.edges[e.0].weight
    }
}

impl<K> MutableStorage for AdjacencyList<K>
where
    K: Debug + Clone + Eq + Hash,
{
    fn with_node_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeInterner::new(),
            edges: Vec::new(),
            adj: Vec::with_capacity(capacity),
        }
    }

    fn add_node(&mut self, key: Self::Key, position: Position) -> NodeId {
        let id = self.nodes.intern(key, position);
        if self.adj.len() <= id.0 {
            self.adj.resize(id.0 + 1, Vec::new());
        }
        id
    }

    fn add_edge_by_id(&mut self, a: NodeId, b: NodeId, weight: f64) -> EdgeId {
        let max = a.0.max(b.0);
        if self.adj.len() <= max {
            self.adj.resize(max + 1, Vec::new());
        }
        let eid = EdgeId(self.edges.len());
        self.adj[a.0].push(eid);
        if a != b {
            self.adj[b.0].push(eid);
        }
        self.edges.push(EdgeRecord::new(a, b, weight));
        eid
    }
}
