//! Graphwalk Core Library
//!
//! Graph model, relaxation helpers and the BFS, DFS, Dijkstra and
//! Bellman-Ford algorithms behind the graphwalk CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
