use crate::graph::traits::{Graph, MutableGraph, NodeId, Weight};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists
///
/// Node insertion order and per-node edge order are preserved, so every
/// traversal over the same graph visits edges in the same order.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in insertion order
    nodes: Vec<N>,

    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,

    /// Incoming edges for each node: node -> [(source, weight)]
    incoming_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            outgoing_edges: HashMap::with_capacity(nodes),
            incoming_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from a list of weighted edges, adding endpoints as needed.
    /// Weights are stored as given; see [`Self::validate_non_negative`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_node(from);
            graph.add_node(to);
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Returns an iterator over the incoming edges to a node
    pub fn incoming_edges(&self, node: N) -> impl Iterator<Item = (N, W)> + '_ {
        self.incoming_edges
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn neighbors(&self, node: N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&node) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: N) -> bool {
        self.outgoing_edges.contains_key(&node)
    }

    fn edge_weight(&self, from: N, to: N) -> Option<W> {
        self.outgoing_edges
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.has_node(node) {
            return false;
        }
        self.nodes.push(node);
        self.outgoing_edges.insert(node, Vec::new());
        self.incoming_edges.insert(node, Vec::new());
        true
    }

    fn remove_node(&mut self, node: N) -> bool {
        if !self.has_node(node) {
            return false;
        }

        // Remove all edges connected to this node
        if let Some(outgoing) = self.outgoing_edges.remove(&node) {
            for (target, _) in outgoing {
                if let Some(incoming) = self.incoming_edges.get_mut(&target) {
                    incoming.retain(|(source, _)| *source != node);
                }
            }
        }

        if let Some(incoming) = self.incoming_edges.remove(&node) {
            for (source, _) in incoming {
                if let Some(outgoing) = self.outgoing_edges.get_mut(&source) {
                    outgoing.retain(|(target, _)| *target != node);
                }
            }
        }

        self.nodes.retain(|n| *n != node);
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if !self.has_node(from) || !self.has_node(to) {
            return false;
        }

        // Replace the weight if the edge already exists
        if self.has_edge(from, to) {
            return self.update_edge_weight(from, to, weight);
        }

        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            outgoing.push((to, weight));
        }
        if let Some(incoming) = self.incoming_edges.get_mut(&to) {
            incoming.push((from, weight));
        }

        true
    }

    fn remove_edge(&mut self, from: N, to: N) -> bool {
        let mut removed = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| *target != to);
            removed = len_before > outgoing.len();
        }

        if let Some(incoming) = self.incoming_edges.get_mut(&to) {
            incoming.retain(|(source, _)| *source != from);
        }

        removed
    }

    fn update_edge_weight(&mut self, from: N, to: N, weight: W) -> bool {
        let mut updated = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
                edge.1 = weight;
                updated = true;
            }
        }

        if let Some(incoming) = self.incoming_edges.get_mut(&to) {
            if let Some(edge) = incoming.iter_mut().find(|(source, _)| *source == from) {
                edge.1 = weight;
            }
        }

        updated
    }
}
