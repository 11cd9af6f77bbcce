use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// A single logged edit on a [`GraphView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation<N> {
    /// The directed edge was disabled
    EdgeRemoved(N, N),
    /// Every edge leaving or entering the node was disabled
    NodeRemoved(N),
}

/// A mutable view over an immutable base graph
///
/// Removals are recorded on a stack and undone by popping it, so the cost of
/// a mutate/restore cycle is proportional to the number of edits rather than
/// to the size of the graph. The base graph is only ever read.
#[derive(Debug)]
pub struct GraphView<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    base: &'g G,
    removed_edges: HashSet<(N, N)>,
    removed_nodes: HashSet<N>,
    log: Vec<Mutation<N>>,
    _weight: PhantomData<W>,
}

impl<'g, N, W, G> GraphView<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Creates an unmodified view of `base`
    pub fn new(base: &'g G) -> Self {
        GraphView {
            base,
            removed_edges: HashSet::new(),
            removed_nodes: HashSet::new(),
            log: Vec::new(),
            _weight: PhantomData,
        }
    }

    /// The graph this view is layered on
    pub fn base(&self) -> &'g G {
        self.base
    }

    /// Disables the edge `from -> to` in this view.
    ///
    /// Removing an edge that does not exist in the base graph, or that is
    /// already disabled, is a no-op. Returns true if a mutation was logged.
    pub fn remove_edge(&mut self, from: N, to: N) -> bool {
        if !self.base.has_edge(from, to) || !self.removed_edges.insert((from, to)) {
            return false;
        }
        self.log.push(Mutation::EdgeRemoved(from, to));
        true
    }

    /// Disables every edge leaving `node`. Edges entering it are hidden too,
    /// so a search never settles a node it cannot leave.
    ///
    /// Idempotent. Returns true if a mutation was logged.
    pub fn remove_node(&mut self, node: N) -> bool {
        if !self.base.has_node(node) || !self.removed_nodes.insert(node) {
            return false;
        }
        self.log.push(Mutation::NodeRemoved(node));
        true
    }

    /// Current depth of the mutation log, usable with [`Self::restore_to`]
    pub fn checkpoint(&self) -> usize {
        self.log.len()
    }

    /// Undoes mutations, newest first, until the log is back at `checkpoint`.
    ///
    /// Fails with [`Error::CorruptedView`] if a logged removal is no longer
    /// recorded in the removal sets, or if removals remain once the whole log
    /// has been unwound.
    pub fn restore_to(&mut self, checkpoint: usize) -> Result<()> {
        while self.log.len() > checkpoint {
            let undone = match self.log.pop() {
                Some(Mutation::EdgeRemoved(from, to)) => self.removed_edges.remove(&(from, to)),
                Some(Mutation::NodeRemoved(node)) => self.removed_nodes.remove(&node),
                None => break,
            };
            if !undone {
                return Err(Error::CorruptedView(format!(
                    "logged removal missing with {} edits left",
                    self.log.len()
                )));
            }
        }
        if self.log.is_empty() && !(self.removed_edges.is_empty() && self.removed_nodes.is_empty()) {
            return Err(Error::CorruptedView(format!(
                "{} edges and {} nodes still removed after a full restore",
                self.removed_edges.len(),
                self.removed_nodes.len()
            )));
        }
        Ok(())
    }

    /// Undoes every mutation, returning the view to the base graph
    pub fn restore(&mut self) -> Result<()> {
        self.restore_to(0)
    }

    /// Number of mutations currently applied
    pub fn mutation_count(&self) -> usize {
        self.log.len()
    }

    /// True when the view is exactly the base graph
    pub fn is_pristine(&self) -> bool {
        self.log.is_empty() && self.removed_edges.is_empty() && self.removed_nodes.is_empty()
    }

    /// True if `node` has been disabled in this view
    pub fn is_node_removed(&self, node: N) -> bool {
        self.removed_nodes.contains(&node)
    }

    fn is_edge_active(&self, from: N, to: N) -> bool {
        !self.removed_nodes.contains(&from)
            && !self.removed_nodes.contains(&to)
            && !self.removed_edges.contains(&(from, to))
    }
}

impl<'g, N, W, G> Graph<N, W> for GraphView<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn edge_count(&self) -> usize {
        self.base
            .nodes()
            .map(|node| self.neighbors(node).count())
            .sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        self.base.nodes()
    }

    fn neighbors(&self, node: N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if self.removed_nodes.contains(&node) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.base
                .neighbors(node)
                .filter(move |(target, _)| self.is_edge_active(node, *target)),
        )
    }

    fn has_node(&self, node: N) -> bool {
        self.base.has_node(node)
    }

    fn edge_weight(&self, from: N, to: N) -> Option<W> {
        if !self.is_edge_active(from, to) {
            return None;
        }
        self.base.edge_weight(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn line() -> DirectedGraph<char, u32> {
        DirectedGraph::from_edges([('a', 'b', 1), ('b', 'c', 1)])
    }

    #[test]
    fn test_restore_detects_missing_removal() {
        let graph = line();
        let mut view = GraphView::new(&graph);
        view.remove_edge('a', 'b');
        view.remove_node('c');
        view.removed_nodes.clear();

        assert!(matches!(view.restore(), Err(Error::CorruptedView(_))));
    }

    #[test]
    fn test_restore_detects_unlogged_removal() {
        let graph = line();
        let mut view = GraphView::new(&graph);
        view.remove_edge('a', 'b');
        view.removed_edges.insert(('b', 'c'));

        assert!(matches!(view.restore(), Err(Error::CorruptedView(_))));
        assert!(!view.is_pristine());
    }

    #[test]
    fn test_partial_restore_skips_the_emptiness_check() {
        let graph = line();
        let mut view = GraphView::new(&graph);
        view.remove_edge('a', 'b');
        let checkpoint = view.checkpoint();
        view.remove_node('b');

        assert!(view.restore_to(checkpoint).is_ok());
        assert_eq!(view.mutation_count(), 1);
        assert!(view.restore().is_ok());
        assert!(view.is_pristine());
    }
}
