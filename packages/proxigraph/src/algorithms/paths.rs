//! Path reconstruction from predecessor maps.
//!
//! Paths are returned source-first; the backward predecessor walk reverses
//! internally. A missing path between nodes of different components is an
//! expected outcome, surfaced as `None` (or `GraphError::NoPath` from the
//! checked entry point), never a panic.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::traits::{EdgeWeights, GraphBase};

use super::sssp::{Engine, ShortestPaths, shortest_paths_from};

/// An explicit node sequence backed by real edges, with its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<K> {
    /// Node labels ordered source -> target.
    pub nodes: Vec<K>,
    /// Sum of edge weights along the sequence, as reported by the engine.
    pub total_weight: f64,
}

impl<K> Path<K> {
    pub fn source(&self) -> &K {
        &self.nodes[0]
    }

    pub fn target(&self) -> &K {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> ShortestPaths<K>
where
    K: Debug + Clone + Eq + Hash,
{
    /// Walk predecessors back from `target`; `None` when the target is
    /// unknown or unreachable.
    pub fn path_to(&self, target: &K) -> Option<Path<K>> {
        self.path_by_index(self.index_of(target)?)
    }

    pub(crate) fn path_by_index(&self, target_index: usize) -> Option<Path<K>> {
        let total_weight = self.distances[target_index]?;

        let mut indices = vec![target_index];
        let mut current = target_index;
        while let Some(pred) = self.predecessors[current] {
            indices.push(pred.0);
            current = pred.0;
        }
        indices.reverse();

        Some(Path {
            nodes: indices.into_iter().map(|i| self.nodes[i].clone()).collect(),
            total_weight,
        })
    }
}

/// Checked single-pair reconstruction over an existing run.
pub fn reconstruct<K>(run: &ShortestPaths<K>, target: &K) -> Result<Path<K>>
where
    K: Debug + Clone + Eq + Hash,
{
    if run.index_of(target).is_none() {
        return Err(GraphError::UnknownTarget(format!("{target:?}")));
    }
    run.path_to(target).ok_or(GraphError::NoPath)
}

/// One engine run from `source`, then a path to every other reachable node.
///
/// Amortizing the engine across all targets is what keeps all-pairs
/// consumers (betweenness) at one run per source instead of one per pair.
pub fn reconstruct_all<G>(graph: &G, source: &G::Key, engine: Engine) -> Result<Vec<Path<G::Key>>>
where
    G: GraphBase + EdgeWeights,
{
    let run = shortest_paths_from(graph, source, engine)?;
    let paths = graph
        .node_ids()
        .filter(|&id| id != run.source)
        .filter_map(|id| run.path_by_index(id.0))
        .collect();
    Ok(paths)
}
