//! Error types shared across construction and analysis.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("source node {0} is not present in the graph")]
    UnknownSource(String),

    #[error("target node {0} is not present in the graph")]
    UnknownTarget(String),

    /// Expected outcome for nodes in different components, not a defect.
    #[error("no path exists to the requested target")]
    NoPath,

    #[error("negative-weight cycle reachable from node {0}")]
    NegativeCycle(String),

    #[error("self-loops are not allowed in a simple graph")]
    SelfLoop,

    #[error("parallel edges are not allowed in a simple graph")]
    ParallelEdge,

    #[error("edge weights must be non-negative, got {0}")]
    NegativeWeight(f64),

    #[error("proximity threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, GraphError>;
