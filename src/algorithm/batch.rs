use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::Path;
use crate::algorithm::yen::k_shortest_paths;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Runs independent k-shortest-paths queries in parallel.
///
/// The graph is shared read-only between workers; every query mutates only
/// its own overlay. Results are returned in the order of `queries`.
pub fn k_shortest_paths_batch<N, W, G>(
    graph: &G,
    queries: &[(N, N)],
    k: usize,
) -> Vec<Result<Vec<Path<N, W>>>>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    log::debug!("Running {} k-shortest-paths queries (k = {})", queries.len(), k);
    queries
        .par_iter()
        .map(|&(source, target)| k_shortest_paths(graph, source, target, k))
        .collect()
}

/// Runs independent single shortest path searches in parallel.
/// `Ok(None)` marks an unreachable target.
pub fn shortest_paths_batch<N, W, G>(graph: &G, queries: &[(N, N)]) -> Vec<Result<Option<Path<N, W>>>>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    let dijkstra = Dijkstra::new();
    queries
        .par_iter()
        .map(|&(source, target)| dijkstra.shortest_path(graph, source, target))
        .collect()
}
