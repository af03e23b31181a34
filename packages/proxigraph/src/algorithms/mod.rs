pub mod betweenness;
pub mod paths;
pub mod propagation;
pub mod proximity;
pub mod relaxation;
pub mod sssp;

pub use betweenness::*;
pub use paths::*;
pub use propagation::*;
pub use proximity::*;
pub use relaxation::*;
pub use sssp::*;
