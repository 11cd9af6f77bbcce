use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random directed graph with `n` nodes and roughly
/// `edge_factor * n` edges. The same seed always produces the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops; integral weights keep path sums exact
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1u32..100) as f64);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid where every cell links to its eight
/// neighbours. Cardinal moves cost 1.0, diagonal moves 1.4.
/// Node ids are `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_node(v);
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(node, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

/// Generates the complete DAG on `n` nodes: an edge `i -> j` of weight
/// `(j - i)^2` for every `i < j`. There are exactly `2^(n-2)` distinct
/// paths from `0` to `n - 1` when `n >= 2`.
pub fn generate_complete_dag(n: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);

    for v in 0..n {
        graph.add_node(v);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let span = (j - i) as f64;
            graph.add_edge(i, j, OrderedFloat(span * span));
        }
    }

    graph
}
