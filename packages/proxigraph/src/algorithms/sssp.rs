//! Single-source shortest paths: shared result type and engine dispatch.
//!
//! Two engines produce this result. Both relax with strict `<`, so the first
//! improvement found in iteration order wins ties, and on non-negative
//! graphs with a unique shortest path per pair they return identical
//! distances and predecessors.

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::NodeId;
use crate::error::Result;
use crate::traits::{EdgeWeights, GraphBase};

use super::propagation::spfa;
use super::relaxation::bellman_ford;

/// Which shortest-path engine to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Repeated passes over the full edge set (Bellman-Ford).
    FullRelaxation,
    /// FIFO queue propagation (SPFA); the faster default on sparse graphs.
    QueuePropagation,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::QueuePropagation
    }
}

/// Per-run shortest-path state: distances and predecessors from one source,
/// indexed by `NodeId`. Created fresh for every run and never shared.
#[derive(Debug)]
pub struct ShortestPaths<K> {
    pub source: NodeId,
    pub nodes: Vec<K>,
    /// `None` = unreachable; the source itself holds `Some(0.0)`.
    pub distances: Vec<Option<f64>>,
    /// `None` for the source and for unreachable nodes.
    pub predecessors: Vec<Option<NodeId>>,
}

impl<K> ShortestPaths<K>
where
    K: Debug + Clone + Eq + Hash,
{
    pub(crate) fn init<G>(graph: &G, source: NodeId) -> Self
    where
        G: GraphBase<Key = K>,
    {
        let n = graph.order();
        let mut distances = vec![None; n];
        distances[source.0] = Some(0.0);
        Self {
            source,
            nodes: graph.node_ids().map(|id| graph.node_key(id).clone()).collect(),
            distances,
            predecessors: vec![None; n],
        }
    }

    pub(crate) fn index_of(&self, key: &K) -> Option<usize> {
        self.nodes.iter().position(|k| k == key)
    }

    /// Converged distance to `key`, or `None` if unknown or unreachable.
    pub fn distance_to(&self, key: &K) -> Option<f64> {
        self.distances[self.index_of(key)?]
    }

    pub fn is_reachable(&self, key: &K) -> bool {
        self.distance_to(key).is_some()
    }
}

/// Run the selected engine from `source`.
///
/// Errors with `UnknownSource` if the label is absent, or `NegativeCycle`
/// if the hardening check trips (never on true Euclidean weights).
pub fn shortest_paths_from<G>(
    graph: &G,
    source: &G::Key,
    engine: Engine,
) -> Result<ShortestPaths<G::Key>>
where
    G: GraphBase + EdgeWeights,
{
    match engine {
        Engine::FullRelaxation => bellman_ford(graph, source),
        Engine::QueuePropagation => spfa(graph, source),
    }
}

/// Relax the directed sense u -> v of an edge with weight `w`.
/// Returns true when the tentative distance of `v` improved.
pub(crate) fn relax<K>(run: &mut ShortestPaths<K>, u: NodeId, v: NodeId, w: f64) -> bool {
    if let Some(du) = run.distances[u.0] {
        let candidate = du + w;
        if run.distances[v.0].map_or(true, |dv| candidate < dv) {
            run.distances[v.0] = Some(candidate);
            run.predecessors[v.0] = Some(u);
            return true;
        }
    }
    false
}
