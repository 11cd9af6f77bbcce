use std::env;
use std::time::{Duration, Instant};

use yen_ksp::algorithm::ShortestPathAlgorithm;
use yen_ksp::graph::generators::generate_random_graph;
use yen_ksp::graph::Graph;
use yen_ksp::{Dijkstra, KShortestPaths};

// Times the first `k` paths between 0 and n-1 on a seeded random graph
fn benchmark_query(num_nodes: usize, edge_factor: f64, k: usize, seed: u64) -> (Duration, Duration, usize) {
    let graph = generate_random_graph(num_nodes, edge_factor, seed);
    let source = 0;
    let target = num_nodes - 1;

    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    let start = Instant::now();
    let single = Dijkstra::new().shortest_path(&graph, source, target);
    let dijkstra_time = start.elapsed();
    match single {
        Ok(Some(path)) => println!("  - Shortest path: {} hops, {:?}", path.hop_count(), path.weight()),
        Ok(None) => println!("  - Target unreachable"),
        Err(err) => println!("  - Search failed: {}", err),
    }

    let start = Instant::now();
    let mut found = 0;
    match KShortestPaths::new(&graph, source, target) {
        Ok(generator) => {
            for path in generator.take(k) {
                match path {
                    Ok(_) => found += 1,
                    Err(err) => {
                        println!("  - Query aborted: {}", err);
                        break;
                    }
                }
            }
        }
        Err(err) => println!("  - Invalid query: {}", err),
    }
    let yen_time = start.elapsed();

    println!("  - Found {} of {} requested paths in {:?}", found, k, yen_time);

    (dijkstra_time, yen_time, found)
}

fn main() {
    env_logger::init();

    // Usage: benchmark [k] [edge_factor] [seed]
    let args: Vec<String> = env::args().collect();
    let k = args.get(1).and_then(|arg| arg.parse().ok()).unwrap_or(10);
    let edge_factor = args.get(2).and_then(|arg| arg.parse().ok()).unwrap_or(4.0);
    let seed = args.get(3).and_then(|arg| arg.parse().ok()).unwrap_or(42);

    let graph_sizes = [100, 1_000, 10_000, 50_000];

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Yen (k = {})", k);
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let (dijkstra_time, yen_time, found) = benchmark_query(size, edge_factor, k, seed);
        results.push((size, dijkstra_time, yen_time, found));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "Dijkstra (ms)", "Yen (ms)", "Paths");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, yen_time, found) in &results {
        println!(
            "{:<10} | {:<15.3} | {:<15.3} | {:<10}",
            size,
            dijkstra_time.as_secs_f64() * 1000.0,
            yen_time.as_secs_f64() * 1000.0,
            found
        );
    }
}
