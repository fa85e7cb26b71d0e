//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search (depth and parent per reachable vertex)
//! - `dfs`: Depth-first search with discovery/finish timestamps
//! - `dijkstra`: Single-source shortest paths for non-negative weights
//! - `bellman_ford`: Single-source shortest paths with negative-cycle detection
//! - `shared`: Initialization and relaxation used by the algorithms above

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::breadth_first_search;
pub use dfs::{depth_first_search, DfsClock};
pub use dijkstra::{dijkstra, dijkstra_with_options, DijkstraOptions};
pub use shared::{
    initialize_single_source, prepare_graph_for_breadth_first_search,
    prepare_graph_for_depth_first_search, relax,
};
