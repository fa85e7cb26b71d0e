use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bounds every vertex key has to satisfy
///
/// Keys are compared and hashed for lookup, and rendered in error messages
/// and reports.
pub trait VertexKey: Clone + Eq + Hash + Debug + Display {}

impl<T: Clone + Eq + Hash + Debug + Display> VertexKey for T {}

/// Traversal color used by BFS and DFS
///
/// - `White`: not yet discovered
/// - `Grey`: discovered, neighbors not fully explored
/// - `Black`: fully explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Grey,
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Grey => write!(f, "grey"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A vertex together with the per-run traversal state the algorithms write
///
/// `parent` names another vertex of the same graph by key; the graph owns
/// every vertex, so parent chains are followed by lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<K> {
    key: K,
    color: Color,
    /// Edge count from the BFS source; `None` until reached
    pub depth: Option<usize>,
    /// DFS discovery tick (0 before DFS runs)
    pub start: u64,
    /// DFS finish tick (0 before DFS runs)
    pub finish: u64,
    pub shortest_path_estimate: f64,
    pub parent: Option<K>,
}

impl<K: VertexKey> Vertex<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            color: Color::White,
            depth: None,
            start: 0,
            finish: 0,
            shortest_path_estimate: f64::INFINITY,
            parent: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Back to white, for the reset before a new traversal
    pub(crate) fn reset_color(&mut self) {
        self.color = Color::White;
    }

    /// Move the color forward; a request to move backwards is ignored
    pub fn advance_color(&mut self, color: Color) {
        if color > self.color {
            self.color = color;
        }
    }

    /// Whether a single-source initialization has given this vertex a finite estimate
    pub fn is_reached(&self) -> bool {
        self.shortest_path_estimate.is_finite()
    }
}
