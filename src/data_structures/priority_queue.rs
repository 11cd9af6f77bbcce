use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{NodeId, Weight};
use crate::{Error, Result};

/// Priority frontier for label-setting shortest path searches
///
/// A binary heap with lazy deletion: decreasing a node's distance pushes a
/// new heap entry and the superseded one is skipped when it surfaces.
/// Entries pop by smallest distance, ties by smallest node.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// The underlying binary heap, possibly holding stale entries
    heap: BinaryHeap<Reverse<(W, N)>>,
    /// Best known tentative distance for every live node
    best: HashMap<N, W>,
}

impl<N, W> Default for Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            best: HashMap::new(),
        }
    }

    /// Returns true if no live entries remain
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns true if `node` has a live tentative distance
    pub fn contains(&self, node: N) -> bool {
        self.best.contains_key(&node)
    }

    /// Returns the tentative distance of `node`, if any
    pub fn get(&self, node: N) -> Option<W> {
        self.best.get(&node).copied()
    }

    /// Records `distance` for `node` when it has no entry yet or when
    /// `distance` is strictly smaller. Returns true if the value was recorded.
    pub fn insert_or_decrease(&mut self, node: N, distance: W) -> bool {
        match self.best.get(&node) {
            Some(current) if distance >= *current => false,
            _ => {
                self.best.insert(node, distance);
                self.heap.push(Reverse((distance, node)));
                true
            }
        }
    }

    /// Removes and returns the node with the smallest tentative distance
    pub fn pop_min(&mut self) -> Result<(N, W)> {
        while let Some(Reverse((distance, node))) = self.heap.pop() {
            // Skip entries superseded by a later decrease
            if self.best.get(&node) == Some(&distance) {
                self.best.remove(&node);
                return Ok((node, distance));
            }
        }
        Err(Error::EmptyFrontier)
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
        self.best.clear();
    }
}
