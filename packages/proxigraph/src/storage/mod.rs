pub mod adjacency_list;

pub use adjacency_list::AdjacencyList;
