use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yen_ksp::graph::generators::generate_random_graph;
use yen_ksp::graph::{DirectedGraph, Graph, GraphView};

fn diamond() -> DirectedGraph<char, u32> {
    DirectedGraph::from_edges([
        ('S', 'A', 1),
        ('S', 'B', 2),
        ('A', 'T', 2),
        ('B', 'T', 1),
        ('A', 'B', 1),
    ])
}

// Every node with its outgoing edges, in iteration order
fn snapshot<N, W, G>(graph: &G) -> Vec<(N, Vec<(N, W)>)>
where
    N: yen_ksp::NodeId,
    W: yen_ksp::Weight,
    G: Graph<N, W>,
{
    graph
        .nodes()
        .map(|node| (node, graph.neighbors(node).collect()))
        .collect()
}

#[test]
fn test_remove_edge_is_idempotent() {
    let graph = diamond();
    let mut view = GraphView::new(&graph);

    assert!(view.remove_edge('S', 'A'));
    assert!(!view.remove_edge('S', 'A'));
    // not an edge of the base graph
    assert!(!view.remove_edge('S', 'T'));
    assert!(!view.remove_edge('X', 'Y'));

    assert_eq!(view.mutation_count(), 1);
    assert!(!view.has_edge('S', 'A'));
    assert_eq!(view.neighbors('S').collect::<Vec<_>>(), vec![('B', 2)]);
    assert_eq!(view.edge_count(), 4);

    // the base graph is untouched
    assert!(graph.has_edge('S', 'A'));
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_remove_node_hides_its_edges() {
    let graph = diamond();
    let mut view = GraphView::new(&graph);

    assert!(view.remove_node('A'));
    assert!(!view.remove_node('A'));
    assert!(view.is_node_removed('A'));

    assert_eq!(view.neighbors('A').count(), 0);
    assert_eq!(view.neighbors('S').collect::<Vec<_>>(), vec![('B', 2)]);
    assert_eq!(view.edge_weight('A', 'B'), None);
    assert!(view.has_node('A'));
}

#[test]
fn test_restore_returns_exact_base() {
    let graph = diamond();
    let before = snapshot(&graph);
    let mut view = GraphView::new(&graph);

    view.remove_edge('S', 'A');
    view.remove_edge('A', 'B');
    view.remove_node('B');
    view.remove_edge('S', 'A');
    assert_ne!(snapshot(&view), before);

    view.restore().unwrap();
    assert!(view.is_pristine());
    assert_eq!(view.mutation_count(), 0);
    assert_eq!(snapshot(&view), before);
}

#[test]
fn test_restore_to_checkpoint() {
    let graph = diamond();
    let mut view = GraphView::new(&graph);

    view.remove_edge('S', 'A');
    let checkpoint = view.checkpoint();
    view.remove_node('B');
    view.remove_edge('A', 'T');

    view.restore_to(checkpoint).unwrap();
    assert_eq!(view.mutation_count(), 1);
    assert!(!view.is_node_removed('B'));
    assert!(view.has_edge('A', 'T'));
    assert!(!view.has_edge('S', 'A'));
    assert!(!view.is_pristine());
}

#[test]
fn test_random_mutation_cycles_restore_exactly() {
    for seed in 0..5 {
        let graph = generate_random_graph(50, 3.0, seed);
        let before = snapshot(&graph);
        let mut view = GraphView::new(&graph);
        let mut rng = StdRng::seed_from_u64(seed + 100);

        for _round in 0..10 {
            for _ in 0..20 {
                let u = rng.gen_range(0..50);
                if rng.gen_bool(0.5) {
                    view.remove_node(u);
                } else if let Some((v, _)) = graph.neighbors(u).next() {
                    view.remove_edge(u, v);
                }
            }
            view.restore().unwrap();
            assert!(view.is_pristine());
            assert_eq!(snapshot(&view), before, "seed {} did not restore", seed);
        }
    }
}
