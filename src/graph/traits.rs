use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};
use num_traits::{Bounded, Zero};

/// Opaque node identifier. Ordering is used for deterministic tie-breaking.
pub trait NodeId: Copy + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Edge weight. Floating point weights go through `OrderedFloat`.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + Add<Output = Self> + Sub<Output = Self> {
    /// Adds two weights, returning None if the sum leaves the range of `Self`
    fn checked_sum(self, other: Self) -> Option<Self> {
        if other >= Self::zero() {
            if self > <Self as Bounded>::max_value() - other {
                return None;
            }
        } else if self < <Self as Bounded>::min_value() - other {
            return None;
        }
        Some(self + other)
    }
}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded + Add<Output = T> + Sub<Output = T> {}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes, in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing edges from a node.
    /// Unknown nodes have no neighbors.
    fn neighbors(&self, node: N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: N, to: N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: N, to: N) -> Option<W> {
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node to the graph. Returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node and its connected edges from the graph
    fn remove_node(&mut self, node: N) -> bool;

    /// Adds a directed edge between nodes with the given weight.
    /// An existing edge between the same pair has its weight replaced.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: N, to: N) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: N, to: N, weight: W) -> bool;
}
