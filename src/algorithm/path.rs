use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::graph::{Graph, NodeId, Weight};

/// A path through a graph with its cached total weight
///
/// Paths are never empty. They order by total weight first and then by the
/// lexicographic order of their node sequences, which is the tie-break rule
/// used when ranking equal-weight alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    nodes: Vec<N>,
    weight: W,
}

impl<N, W> Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a path from a node sequence and its precomputed weight.
    /// Returns None for an empty sequence.
    pub fn new(nodes: Vec<N>, weight: W) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        Some(Path { nodes, weight })
    }

    /// A zero-weight path holding just `node`
    pub fn single(node: N) -> Self {
        Path {
            nodes: vec![node],
            weight: W::zero(),
        }
    }

    /// Builds a path from `nodes`, summing edge weights from `graph`.
    /// Returns None if the sequence is empty, uses an edge the graph lacks,
    /// or its total weight overflows `W`.
    pub fn from_graph<G>(graph: &G, nodes: Vec<N>) -> Option<Self>
    where
        G: Graph<N, W> + ?Sized,
    {
        let mut weight = W::zero();
        for pair in nodes.windows(2) {
            weight = weight.checked_sum(graph.edge_weight(pair[0], pair[1])?)?;
        }
        Path::new(nodes, weight)
    }

    /// The node sequence, source first
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Total weight of all edges on the path
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// First node of the path
    pub fn source(&self) -> N {
        self.nodes[0]
    }

    /// Last node of the path
    pub fn target(&self) -> N {
        self.nodes[self.nodes.len() - 1]
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// True if the path starts with exactly `prefix`
    pub fn starts_with(&self, prefix: &[N]) -> bool {
        self.nodes.starts_with(prefix)
    }

    /// True if no node appears twice
    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|node| seen.insert(*node))
    }

    /// True if every consecutive pair is an edge of `graph`
    pub fn is_valid_in<G>(&self, graph: &G) -> bool
    where
        G: Graph<N, W> + ?Sized,
    {
        self.edges().all(|(from, to)| graph.has_edge(from, to))
    }

    /// Consumes the path, returning its node sequence
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N, W> Ord for Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.nodes.cmp(&other.nodes))
    }
}

impl<N, W> PartialOrd for Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W> fmt::Display for Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{:?}", node)?;
        }
        write!(f, " (weight {:?})", self.weight)
    }
}
