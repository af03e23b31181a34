//! Full-relaxation shortest-path engine (Bellman-Ford).
//!
//! Each pass scans every edge and relaxes it in both directions; the run
//! stops early once a pass relaxes nothing. Correct for any non-negative
//! weights without ordering assumptions, at O(V·E) worst case.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::traits::{EdgeWeights, GraphBase};

use super::sssp::{ShortestPaths, relax};

pub fn bellman_ford<G>(graph: &G, source: &G::Key) -> Result<ShortestPaths<G::Key>>
where
    G: GraphBase + EdgeWeights,
{
    let source_id = graph
        .node_id(source)
        .ok_or_else(|| GraphError::UnknownSource(format!("{source:?}")))?;

    let mut run = ShortestPaths::init(graph, source_id);
    let budget = graph.order().saturating_sub(1);
    let mut converged = true;
    let mut passes = 0;

    for _ in 0..budget {
        let mut changed = false;
        for e in graph.edge_ids() {
            let (a, b) = graph.endpoints(e);
            let w = graph.weight_of(e);
            // one stored record per undirected edge, so relax both senses
            changed |= relax(&mut run, a, b, w);
            changed |= relax(&mut run, b, a, w);
        }
        passes += 1;
        if !changed {
            converged = true;
            break;
        }
        converged = false;
    }

    if !converged {
        // budget exhausted with the last pass still relaxing: one
        // verification pass distinguishes slow convergence from a
        // negative-weight cycle
        for e in graph.edge_ids() {
            let (a, b) = graph.endpoints(e);
            let w = graph.weight_of(e);
            if relax(&mut run, a, b, w) || relax(&mut run, b, a, w) {
                return Err(GraphError::NegativeCycle(format!("{:?}", graph.node_key(a))));
            }
        }
    }

    debug!(
        source = ?source,
        passes,
        order = graph.order(),
        "full relaxation converged"
    );
    Ok(run)
}
