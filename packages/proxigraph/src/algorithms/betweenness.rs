//! Betweenness centrality over all-pairs shortest paths.
//!
//! One engine run per source, then one predecessor walk per reachable
//! target: every node strictly between a pair's endpoints earns one count
//! for that ordered pair. Scores are normalized by (|V|-1)(|V|-2), the
//! number of ordered pairs a node can possibly sit between, so unreachable
//! pairs lower scores rather than inflating them.
//!
//! At most one shortest path is assumed per ordered pair. When several
//! tied paths exist, only the one selected by the engine's deterministic
//! tie-break (first improvement in iteration order) is counted; credit is
//! not split fractionally across ties.

use std::hash::Hash;

use tracing::{trace, warn};

use crate::traits::{EdgeWeights, GraphBase};

use super::sssp::{Engine, shortest_paths_from};

/// Per-node betweenness scores, indexed like the graph's nodes.
pub struct BetweennessResult<K> {
    pub nodes: Vec<K>,
    /// Scores in [0, 1], parallel to `nodes`.
    pub scores: Vec<f64>,
}

impl<K> BetweennessResult<K>
where
    K: Clone + Eq + Hash,
{
    pub fn score_of(&self, key: &K) -> Option<f64> {
        let index = self.nodes.iter().position(|k| k == key)?;
        Some(self.scores[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.nodes.iter().zip(self.scores.iter().copied())
    }

    /// Nodes sorted by descending score.
    pub fn ranked(&self) -> Vec<(&K, f64)> {
        let mut ranking: Vec<_> = self.iter().collect();
        ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranking
    }
}

/// Betweenness centrality with the default queue-propagation engine.
pub fn betweenness<G>(graph: &G) -> BetweennessResult<G::Key>
where
    G: GraphBase + EdgeWeights,
{
    betweenness_with(graph, Engine::default())
}

/// Betweenness centrality with an explicit engine choice.
///
/// A source run that fails the negative-cycle hardening is skipped with a
/// warning; the remaining sources still contribute. Graphs with fewer than
/// three nodes have no interior positions and score all zeros.
pub fn betweenness_with<G>(graph: &G, engine: Engine) -> BetweennessResult<G::Key>
where
    G: GraphBase + EdgeWeights,
{
    let n = graph.order();
    let mut counts = vec![0u64; n];

    if n >= 3 {
        for s in graph.node_ids() {
            let run = match shortest_paths_from(graph, graph.node_key(s), engine) {
                Ok(run) => run,
                Err(err) => {
                    warn!(source = ?graph.node_key(s), %err, "skipping source run");
                    continue;
                }
            };

            let mut reachable = 0usize;
            for t in graph.node_ids() {
                if t == s || run.distances[t.0].is_none() {
                    continue;
                }
                reachable += 1;
                // count nodes strictly between s and t on the path
                let mut current = run.predecessors[t.0];
                while let Some(pred) = current {
                    if pred == s {
                        break;
                    }
                    counts[pred.0] += 1;
                    current = run.predecessors[pred.0];
                }
            }
            trace!(source = ?graph.node_key(s), reachable, "accumulated source run");
        }
    }

    let scores = if n >= 3 {
        let denominator = ((n - 1) * (n - 2)) as f64;
        counts.iter().map(|&c| c as f64 / denominator).collect()
    } else {
        vec![0.0; n]
    };

    BetweennessResult {
        nodes: graph.node_ids().map(|id| graph.node_key(id).clone()).collect(),
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::storage::AdjacencyList;
    use crate::traits::MutableStorage;
    use crate::wrappers::{ProximityGraph, UndirectedGraph};

    #[test]
    fn path_graph_interiors_outrank_endpoints() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("a", "b", 0.5), ("b", "c", 0.5), ("c", "d", 0.5)])
                .unwrap();
        let result = betweenness(&graph);

        // b sits inside the ordered pairs (a,c), (a,d), (c,a), (d,a): 4 of 6
        let four_sixths = 4.0 / 6.0;
        assert_eq!(result.score_of(&"b"), Some(four_sixths));
        assert_eq!(result.score_of(&"c"), Some(four_sixths));
        assert_eq!(result.score_of(&"a"), Some(0.0));
        assert_eq!(result.score_of(&"d"), Some(0.0));
    }

    #[test]
    fn star_center_scores_one() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("hub", "a", 1.0), ("hub", "b", 1.0), ("hub", "c", 1.0)])
                .unwrap();
        let result = betweenness(&graph);
        assert_eq!(result.score_of(&"hub"), Some(1.0));
        assert_eq!(result.score_of(&"a"), Some(0.0));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let graph: ProximityGraph<&str> = UndirectedGraph::from_weighted_edges([
            ("a", "b", 1.0),
            ("b", "c", 2.0),
            ("a", "c", 2.5),
            ("c", "d", 1.0),
            ("b", "e", 3.0),
        ])
        .unwrap();
        let result = betweenness(&graph);
        assert!(result.scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn disconnected_pairs_score_zero_everywhere() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("a", "b", 1.0), ("c", "d", 1.0)]).unwrap();
        let result = betweenness(&graph);
        assert!(result.scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn tiny_graphs_score_zero() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("a", "b", 1.0)]).unwrap();
        let result = betweenness(&graph);
        assert_eq!(result.scores, vec![0.0, 0.0]);
    }

    #[test]
    fn both_engines_agree_on_scores() {
        let graph: ProximityGraph<&str> = UndirectedGraph::from_weighted_edges([
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("c", "d", 1.0),
            ("d", "e", 1.5),
            ("b", "e", 4.0),
        ])
        .unwrap();
        let relaxed = betweenness_with(&graph, Engine::FullRelaxation);
        let propagated = betweenness_with(&graph, Engine::QueuePropagation);
        assert_eq!(relaxed.scores, propagated.scores);
    }

    #[test]
    fn failing_source_runs_are_skipped_not_fatal() {
        // built on raw storage: the wrapper refuses negative weights, and an
        // undirected negative edge is itself a two-node negative cycle. Runs
        // sourced inside that component fail; the healthy path component
        // must still contribute its counts.
        let mut storage: AdjacencyList<&str> = AdjacencyList::with_node_capacity(5);
        let p = storage.add_node("p", Position::new(0.0, 0.0));
        let q = storage.add_node("q", Position::new(1.0, 0.0));
        storage.add_edge_by_id(p, q, -1.0);

        let a = storage.add_node("a", Position::new(5.0, 0.0));
        let b = storage.add_node("b", Position::new(6.0, 0.0));
        let c = storage.add_node("c", Position::new(7.0, 0.0));
        storage.add_edge_by_id(a, b, 1.0);
        storage.add_edge_by_id(b, c, 1.0);

        let result = betweenness(&storage);

        // b sits inside (a,c) and (c,a): 2 of (5-1)(5-2) ordered pairs
        assert_eq!(result.score_of(&"b"), Some(2.0 / 12.0));
        assert_eq!(result.score_of(&"a"), Some(0.0));
        assert_eq!(result.score_of(&"p"), Some(0.0));
    }

    #[test]
    fn ranking_is_descending() {
        let graph: ProximityGraph<&str> =
            UndirectedGraph::from_weighted_edges([("a", "b", 0.5), ("b", "c", 0.5), ("c", "d", 0.5)])
                .unwrap();
        let result = betweenness(&graph);
        let ranking = result.ranked();
        assert!(ranking.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
