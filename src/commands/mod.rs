//! CLI commands for graphwalk

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod dispatch;
pub mod load;
pub mod report;
pub mod samples;
