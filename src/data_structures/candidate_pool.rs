use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::algorithm::path::Path;
use crate::graph::{NodeId, Weight};

/// Pool of candidate paths awaiting selection
///
/// Pops the lightest path first, equal weights in lexicographic node order.
/// Every node sequence that has ever entered the pool, or been marked as
/// accepted, is remembered so it can never be offered twice.
#[derive(Debug)]
pub struct CandidatePool<N, W>
where
    N: NodeId,
    W: Weight,
{
    heap: BinaryHeap<Reverse<Path<N, W>>>,
    seen: HashSet<Vec<N>>,
}

impl<N, W> Default for CandidatePool<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> CandidatePool<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn new() -> Self {
        CandidatePool {
            heap: BinaryHeap::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds `path` unless an identical node sequence was seen before.
    /// Returns true if the path was added.
    pub fn insert(&mut self, path: Path<N, W>) -> bool {
        if !self.seen.insert(path.nodes().to_vec()) {
            return false;
        }
        self.heap.push(Reverse(path));
        true
    }

    /// Records a path accepted outside the pool so it is never re-offered
    pub fn mark_seen(&mut self, path: &Path<N, W>) {
        self.seen.insert(path.nodes().to_vec());
    }

    /// True if this node sequence has been offered or accepted before
    pub fn has_seen(&self, nodes: &[N]) -> bool {
        self.seen.contains(nodes)
    }

    /// Removes and returns the best pending candidate
    pub fn pop_min(&mut self) -> Option<Path<N, W>> {
        self.heap.pop().map(|Reverse(path)| path)
    }

    /// Returns the best pending candidate without removing it
    pub fn peek(&self) -> Option<&Path<N, W>> {
        self.heap.peek().map(|Reverse(path)| path)
    }

    /// Number of pending candidates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
