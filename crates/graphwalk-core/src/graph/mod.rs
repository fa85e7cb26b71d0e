//! Graph model and traversal/shortest-path algorithms
//!
//! Provides:
//! - `Graph`/`Vertex` with per-vertex traversal state
//! - `GraphFactory` for building graphs from adjacency specifications
//! - BFS, DFS, Dijkstra and Bellman-Ford over those graphs
//! - Parent-chain path reconstruction and serializable reports

pub mod algos;
pub mod factory;
pub mod heap;
pub mod input;
pub mod path;
pub mod samples;
pub mod types;
pub mod vertex;

pub use algos::{
    bellman_ford, breadth_first_search, depth_first_search, dijkstra, dijkstra_with_options,
    initialize_single_source, prepare_graph_for_breadth_first_search,
    prepare_graph_for_depth_first_search, relax, DfsClock, DijkstraOptions,
};
pub use factory::GraphFactory;
pub use heap::EstimateHeap;
pub use input::AdjacencySpec;
pub use path::{path_to, PathResult, VertexReport};
pub use types::{Adjacency, AdjacencyWeights, Edge, Graph, Neighbors, WeightFn};
pub use vertex::{Color, Vertex, VertexKey};
