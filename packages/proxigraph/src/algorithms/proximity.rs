//! Fixed-radius proximity graph construction.
//!
//! Two points are connected when both coordinate differences are within the
//! threshold (closed interval), weighted by their truncated Euclidean
//! distance. The sweep sorts by x and only compares pairs inside the
//! x-window, which collapses the quadratic scan for typical geographic
//! scatter; uniformly dense inputs still degrade to O(n²) since the y-test
//! cannot be pruned by a single sort.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::core::{NodeId, Position, truncate};
use crate::error::{GraphError, Result};
use crate::storage::AdjacencyList;
use crate::traits::GraphBase;
use crate::wrappers::{ProximityGraph, UndirectedGraph};

/// Construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    /// Maximum per-axis coordinate difference for two nodes to connect.
    pub threshold: f64,
    /// Decimal digits kept in edge weights (truncated, not rounded).
    pub precision: u32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            precision: 6,
        }
    }
}

impl ProximityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the proximity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: set the weight precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(GraphError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Build the proximity graph over `records`.
///
/// Records repeating an already-seen label are ignored (the first coordinate
/// pair wins), so datasets that list one entity per observation date build
/// the same graph as their deduplicated form.
pub fn build_graph<K, RI>(records: RI, config: &ProximityConfig) -> Result<ProximityGraph<K>>
where
    K: Debug + Clone + Eq + Hash,
    RI: IntoIterator<Item = (K, f64, f64)>,
{
    config.validate()?;

    let mut graph: ProximityGraph<K> = UndirectedGraph::new(AdjacencyList::new());
    for (key, x, y) in records {
        graph.add_node(key, Position::new(x, y));
    }
    connect_within_threshold(&mut graph, config)?;

    debug!(
        order = graph.order(),
        size = graph.size(),
        threshold = config.threshold,
        "proximity graph built"
    );
    Ok(graph)
}

/// X-sorted sweep: the inner cursor only advances while the x-difference is
/// inside the window, and each candidate pair is additionally tested on y.
/// Pairs are generated once with i < j in sorted order, so no self-loops and
/// no duplicate edges can arise.
fn connect_within_threshold<K>(
    graph: &mut ProximityGraph<K>,
    config: &ProximityConfig,
) -> Result<()>
where
    K: Debug + Clone + Eq + Hash,
{
    let d = config.threshold;

    let mut sorted: Vec<NodeId> = graph.node_ids().collect();
    sorted.sort_by(|&a, &b| graph.position(a).x.total_cmp(&graph.position(b).x));

    for i in 0..sorted.len() {
        let pi = graph.position(sorted[i]);
        for j in (i + 1)..sorted.len() {
            let pj = graph.position(sorted[j]);
            if pj.x - pi.x > d {
                // every later node is even further on x
                break;
            }
            if (pj.y - pi.y).abs() <= d {
                let weight = truncate(pi.distance_to(&pj), config.precision);
                graph.add_edge_checked(sorted[i], sorted[j], weight)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::EdgeWeights;

    fn records(points: &[(&'static str, f64, f64)]) -> Vec<(&'static str, f64, f64)> {
        points.to_vec()
    }

    fn has_edge<K: Debug + Clone + Eq + std::hash::Hash>(
        graph: &ProximityGraph<K>,
        a: &K,
        b: &K,
    ) -> bool {
        let (a, b) = (graph.node_id(a).unwrap(), graph.node_id(b).unwrap());
        graph.neighbors(a).any(|(other, _)| other == b)
    }

    #[test]
    fn collinear_points_connect_only_adjacently() {
        let graph = build_graph(
            records(&[
                ("a", 0.0, 0.0),
                ("b", 0.5, 0.0),
                ("c", 1.0, 0.0),
                ("d", 1.5, 0.0),
            ]),
            &ProximityConfig::default(),
        )
        .unwrap();

        assert_eq!(graph.size(), 3);
        assert!(has_edge(&graph, &"a", &"b"));
        assert!(has_edge(&graph, &"b", &"c"));
        assert!(has_edge(&graph, &"c", &"d"));
        assert!(!has_edge(&graph, &"a", &"c")); // 1.0 > 0.8
        assert!(!has_edge(&graph, &"a", &"d"));
    }

    #[test]
    fn boundary_difference_is_included() {
        let graph = build_graph(
            records(&[("a", 0.0, 0.0), ("b", 0.8, 0.8)]),
            &ProximityConfig::default(),
        )
        .unwrap();
        assert!(has_edge(&graph, &"a", &"b"));
    }

    #[test]
    fn close_on_x_but_far_on_y_does_not_connect() {
        let graph = build_graph(
            records(&[("a", 0.0, 0.0), ("b", 0.1, 2.0)]),
            &ProximityConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn weights_are_truncated_euclidean_distances() {
        // distance = sqrt(0.02) = 0.14142135... -> 0.141421 at 6 digits
        let graph = build_graph(
            records(&[("a", 0.0, 0.0), ("b", 0.1, 0.1)]),
            &ProximityConfig::default(),
        )
        .unwrap();
        let e = graph.edge_ids().next().unwrap();
        assert_eq!(graph.weight_of(e), 0.141_421);
    }

    #[test]
    fn duplicate_coordinates_yield_zero_weight_edges() {
        let graph = build_graph(
            records(&[("a", 2.0, 3.0), ("b", 2.0, 3.0)]),
            &ProximityConfig::default(),
        )
        .unwrap();
        let e = graph.edge_ids().next().unwrap();
        assert_eq!(graph.weight_of(e), 0.0);
    }

    #[test]
    fn duplicate_labels_collapse_to_one_node() {
        let graph = build_graph(
            records(&[("a", 0.0, 0.0), ("a", 5.0, 5.0), ("b", 0.5, 0.0)]),
            &ProximityConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.order(), 2);
        assert!(has_edge(&graph, &"a", &"b"));
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let config = ProximityConfig::new().with_threshold(-0.8);
        let err = build_graph(records(&[("a", 0.0, 0.0)]), &config).unwrap_err();
        assert_eq!(err, GraphError::InvalidThreshold(-0.8));
    }

    #[test]
    fn custom_precision_is_applied() {
        let config = ProximityConfig::new().with_threshold(1.0).with_precision(2);
        let graph = build_graph(records(&[("a", 0.0, 0.0), ("b", 0.1, 0.1)]), &config).unwrap();
        let e = graph.edge_ids().next().unwrap();
        assert_eq!(graph.weight_of(e), 0.14);
    }
}
