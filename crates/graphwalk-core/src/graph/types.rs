use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::vertex::{Vertex, VertexKey};

/// Outgoing edges of one vertex: destination key -> weight
pub type Neighbors<K> = IndexMap<K, f64>;

/// Source key -> outgoing edges, in input order
pub type Adjacency<K> = IndexMap<K, Neighbors<K>>;

/// A directed edge as a (source, destination) key pair
pub type Edge<K> = (K, K);

/// Fixed-topology graph whose vertices carry traversal state
///
/// Topology (vertex set, adjacency and edge list) is set once by
/// [`crate::graph::GraphFactory`]. Algorithms only write the vertices'
/// traversal fields.
#[derive(Debug, Clone)]
pub struct Graph<K: VertexKey> {
    vertices: IndexMap<K, Vertex<K>>,
    adjacency_list: Arc<Adjacency<K>>,
    edges: Vec<Edge<K>>,
}

impl<K: VertexKey> Graph<K> {
    pub(crate) fn new(
        vertices: IndexMap<K, Vertex<K>>,
        adjacency_list: Arc<Adjacency<K>>,
        edges: Vec<Edge<K>>,
    ) -> Self {
        Self {
            vertices,
            adjacency_list,
            edges,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Vertices in input order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K>> {
        self.vertices.values()
    }

    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex<K>> {
        self.vertices.values_mut()
    }

    pub fn vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertices.get(key)
    }

    /// Look up a vertex, failing with [`GraphError::UnknownVertex`]
    pub fn require(&self, key: &K, referenced_by: &str) -> Result<&Vertex<K>> {
        self.vertices
            .get(key)
            .ok_or_else(|| GraphError::unknown_vertex(key, referenced_by))
    }

    pub(crate) fn require_mut(&mut self, key: &K, referenced_by: &str) -> Result<&mut Vertex<K>> {
        self.vertices
            .get_mut(key)
            .ok_or_else(|| GraphError::unknown_vertex(key, referenced_by))
    }

    /// Outgoing edges of `key` (empty if it has none)
    pub fn neighbors(&self, key: &K) -> impl Iterator<Item = (&K, f64)> {
        self.adjacency_list
            .get(key)
            .into_iter()
            .flat_map(|n| n.iter().map(|(k, w)| (k, *w)))
    }

    /// Destination key of the `index`-th outgoing edge of `key`
    pub(crate) fn neighbor_at(&self, key: &K, index: usize) -> Option<&K> {
        self.adjacency_list
            .get(key)
            .and_then(|n| n.get_index(index))
            .map(|(k, _)| k)
    }

    pub fn adjacency_list(&self) -> &Adjacency<K> {
        &self.adjacency_list
    }

    /// Every edge, flattened once at construction
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// Weight function reading weights straight from this graph's adjacency
    pub fn adjacency_weights(&self) -> AdjacencyWeights<K> {
        AdjacencyWeights {
            adjacency: Arc::clone(&self.adjacency_list),
        }
    }
}

/// Caller-supplied edge weight
///
/// Must be pure: the same pair always yields the same weight and the graph
/// is never touched.
pub trait WeightFn<K: VertexKey> {
    fn weight(&self, source: &Vertex<K>, destination: &Vertex<K>) -> f64;
}

impl<K: VertexKey, F> WeightFn<K> for F
where
    F: Fn(&Vertex<K>, &Vertex<K>) -> f64,
{
    fn weight(&self, source: &Vertex<K>, destination: &Vertex<K>) -> f64 {
        self(source, destination)
    }
}

/// Weight lookup in `adjacency[source][destination]`
///
/// Shares the graph's adjacency rather than copying it. A pair with no edge
/// yields NaN, which relaxation rejects.
#[derive(Debug, Clone)]
pub struct AdjacencyWeights<K: VertexKey> {
    adjacency: Arc<Adjacency<K>>,
}

impl<K: VertexKey> WeightFn<K> for AdjacencyWeights<K> {
    fn weight(&self, source: &Vertex<K>, destination: &Vertex<K>) -> f64 {
        self.adjacency
            .get(source.key())
            .and_then(|n| n.get(destination.key()))
            .copied()
            .unwrap_or(f64::NAN)
    }
}
