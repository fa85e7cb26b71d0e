//! Min-heap of vertices keyed by shortest-path estimate
//!
//! `BinaryHeap` has no decrease-key, so a lowered estimate is pushed as a
//! new entry and the outdated one stays behind. [`EstimateHeap::pop_current`]
//! drops entries whose estimate no longer matches the vertex, or whose vertex
//! was already finalized.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::graph::types::Graph;
use crate::graph::vertex::VertexKey;

/// Heap entry: the estimate a vertex had when it was pushed
#[derive(Debug, Clone)]
pub struct HeapEntry<K> {
    pub key: K,
    pub estimate: f64,
    /// Push order, so equal estimates pop first-in first-out
    sequence: u64,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Lazy-deletion min-heap over vertex estimates
#[derive(Debug)]
pub struct EstimateHeap<K: VertexKey> {
    heap: BinaryHeap<Reverse<HeapEntry<K>>>,
    finalized: HashSet<K>,
    next_sequence: u64,
    stale_skipped: usize,
}

impl<K: VertexKey> Default for EstimateHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> EstimateHeap<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            finalized: HashSet::new(),
            next_sequence: 0,
            stale_skipped: 0,
        }
    }

    /// Record `key` at its current `estimate`
    pub fn push(&mut self, key: K, estimate: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            key,
            estimate,
            sequence,
        }));
    }

    /// Pop the entry with the smallest estimate that still describes its
    /// vertex, and mark that vertex finalized
    ///
    /// An entry is stale if its vertex is finalized, or if the vertex's
    /// estimate in `graph` differs from the one recorded at push time.
    pub fn pop_current(&mut self, graph: &Graph<K>) -> Option<HeapEntry<K>> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.finalized.contains(&entry.key) {
                self.stale_skipped += 1;
                continue;
            }
            let current = graph.vertex(&entry.key).map(|v| v.shortest_path_estimate);
            if current != Some(entry.estimate) {
                self.stale_skipped += 1;
                continue;
            }
            self.finalized.insert(entry.key.clone());
            return Some(entry);
        }
        None
    }

    pub fn is_finalized(&self, key: &K) -> bool {
        self.finalized.contains(key)
    }

    /// Entries still in the heap, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// How many stale entries `pop_current` has discarded so far
    pub fn stale_skipped(&self) -> usize {
        self.stale_skipped
    }
}
