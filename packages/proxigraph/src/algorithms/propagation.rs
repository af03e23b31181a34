//! Queue-propagation shortest-path engine (SPFA).
//!
//! Only nodes whose distance actually improved are revisited, so sparse
//! graphs converge without the full-pass cost of the relaxation engine.
//! Because storage is symmetric, every edge incident to a dequeued node is
//! relaxed away from it, and the reverse sense of the same edge is relaxed
//! whenever the other endpoint is dequeued.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::traits::{EdgeWeights, GraphBase};

use super::sssp::{ShortestPaths, relax};

pub fn spfa<G>(graph: &G, source: &G::Key) -> Result<ShortestPaths<G::Key>>
where
    G: GraphBase + EdgeWeights,
{
    let source_id = graph
        .node_id(source)
        .ok_or_else(|| GraphError::UnknownSource(format!("{source:?}")))?;

    let n = graph.order();
    let mut run = ShortestPaths::init(graph, source_id);
    let mut queue = VecDeque::with_capacity(n);
    let mut queued = vec![false; n];
    let mut dequeue_count = vec![0usize; n];
    let mut total_dequeues = 0usize;

    queue.push_back(source_id);
    queued[source_id.0] = true;

    while let Some(u) = queue.pop_front() {
        queued[u.0] = false;
        dequeue_count[u.0] += 1;
        total_dequeues += 1;
        if dequeue_count[u.0] > n {
            // a node can only improve |V| - 1 times on cycle-free weights;
            // more dequeues than that means a negative-weight cycle is
            // pumping its distance
            return Err(GraphError::NegativeCycle(format!("{:?}", graph.node_key(u))));
        }

        for (v, e) in graph.neighbors(u) {
            if relax(&mut run, u, v, graph.weight_of(e)) && !queued[v.0] {
                queued[v.0] = true;
                queue.push_back(v);
            }
        }
    }

    debug!(
        source = ?source,
        total_dequeues,
        order = n,
        "queue propagation converged"
    );
    Ok(run)
}
