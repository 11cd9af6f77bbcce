use std::collections::{HashMap, HashSet};

use crate::algorithm::path::Path;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Final distances from source to every settled node
    pub distances: HashMap<N, W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: HashMap<N, N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance to `node`, if it was reached
    pub fn distance(&self, node: N) -> Option<W> {
        self.distances.get(&node).copied()
    }

    pub fn is_reachable(&self, node: N) -> bool {
        self.distances.contains_key(&node)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    /// Compute shortest paths from a source node to all reachable nodes
    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute one shortest path from `source` to `target`.
    /// `Ok(None)` means the target is unreachable.
    fn shortest_path(&self, graph: &G, source: N, target: N) -> Result<Option<Path<N, W>>> {
        let result = self.compute_shortest_paths(graph, source)?;
        Ok(<Self as ShortestPathAlgorithm<N, W, G>>::get_path(self, &result, target))
    }

    /// Get the shortest path from source to target by walking predecessors
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: N) -> Option<Path<N, W>> {
        let weight = result.distance(target)?;

        let mut nodes = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in path reconstruction at node {:?}", current);
                return None;
            }

            nodes.push(current);
            match result.predecessors.get(&current) {
                Some(pred) => current = *pred,
                None => {
                    // A reached node other than the source must have a predecessor
                    log::warn!("Broken predecessor chain at node {:?}", current);
                    return None;
                }
            }
        }

        nodes.push(result.source);
        nodes.reverse();

        Path::new(nodes, weight)
    }
}
