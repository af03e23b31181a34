//! Fixed-radius proximity graphs over labeled 2D points, with single-source
//! shortest paths (full relaxation or queue propagation) and betweenness
//! centrality computed on top.

pub mod algorithms;
pub mod core;
pub mod error;
pub mod interner;
pub mod storage;
pub mod traits;
pub mod wrappers;

pub use algorithms::*;
pub use core::*;
pub use error::*;
pub use interner::*;
pub use storage::*;
pub use traits::*;
pub use wrappers::*;
