use std::collections::{HashMap, HashSet};

use crate::algorithm::path::Path;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Equal tentative distances are settled in node order, and a predecessor is
/// only replaced on a strictly shorter relaxation, so the path returned for a
/// given graph is always the same one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Label-setting search from `source`, stopping once `target` is settled
    fn run<N, W, G>(&self, graph: &G, source: N, target: Option<N>) -> Result<ShortestPathResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W> + ?Sized,
    {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut settled: HashSet<N> = HashSet::new();

        let mut frontier = Frontier::new();
        frontier.insert_or_decrease(source, W::zero());

        while let Ok((u, dist_u)) = frontier.pop_min() {
            settled.insert(u);
            distances.insert(u, dist_u);

            if target == Some(u) {
                break;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(u) {
                if settled.contains(&v) {
                    continue;
                }
                let dist_v = dist_u.checked_sum(weight).ok_or_else(|| {
                    Error::WeightOverflow(format!("{:?} + {:?} on edge {:?} -> {:?}", dist_u, weight, u, v))
                })?;
                if frontier.insert_or_decrease(v, dist_v) {
                    predecessors.insert(v, u);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathResult<N, W>> {
        self.run(graph, source, None)
    }

    fn shortest_path(&self, graph: &G, source: N, target: N) -> Result<Option<Path<N, W>>> {
        let result = self.run(graph, source, Some(target))?;
        Ok(<Self as ShortestPathAlgorithm<N, W, G>>::get_path(self, &result, target))
    }
}
