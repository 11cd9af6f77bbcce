use ordered_float::OrderedFloat;
use yen_ksp::algorithm::dijkstra::Dijkstra;
use yen_ksp::algorithm::traits::ShortestPathAlgorithm;
use yen_ksp::graph::generators::generate_grid;
use yen_ksp::graph::{DirectedGraph, Graph, GraphView, MutableGraph};
use yen_ksp::{Error, Path, Weight};

type Grid = DirectedGraph<usize, OrderedFloat<f64>>;

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);
    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra = Dijkstra::new();
    let path = dijkstra
        .shortest_path(&graph, source, target)
        .unwrap()
        .expect("Dijkstra should find a path");

    assert_eq!(path.source(), source, "Path should start at source");
    assert_eq!(path.target(), target, "Path should end at target");
    assert!(path.is_valid_in(&graph), "Path should only use existing edges");
    assert!(path.is_loopless());

    // Nine diagonal moves
    assert_eq!(path.hop_count(), 9);
    assert!((path.weight().0 - 12.6).abs() < 1e-9);
}

#[test]
fn test_full_tree_matches_single_target_search() {
    let graph = generate_grid(8, 8);
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances.len(), 64, "Every cell should be reachable");

    for target in [7, 27, 56, 63] {
        let from_tree = <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>, Grid>>::get_path(
            &dijkstra, &result, target,
        )
        .unwrap();
        let direct = dijkstra.shortest_path(&graph, 0, target).unwrap().unwrap();

        assert_eq!(from_tree.weight(), direct.weight());
        assert_eq!(result.distance(target), Some(direct.weight()));
        assert!(from_tree.is_valid_in(&graph));
    }
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // Create a wall of obstacles in the middle
    let obstacles: Vec<usize> = (0..8).map(|y| y * 10 + 5).collect();
    for &obstacle in &obstacles {
        graph.remove_node(obstacle);
    }

    let path = Dijkstra::new()
        .shortest_path(&graph, 0, 99)
        .unwrap()
        .expect("Dijkstra should find a path around obstacles");

    assert_eq!(path.source(), 0);
    assert_eq!(path.target(), 99);
    assert!(path.is_valid_in(&graph));
    for obstacle in &obstacles {
        assert!(!path.nodes().contains(obstacle), "Path should avoid obstacles");
    }
}

#[test]
fn test_source_equals_target() {
    let graph = generate_grid(3, 3);
    let path = Dijkstra::new().shortest_path(&graph, 4, 4).unwrap().unwrap();

    assert_eq!(path.nodes(), &[4]);
    assert_eq!(path.weight(), OrderedFloat(0.0));
}

#[test]
fn test_unreachable_target_is_not_found() {
    let graph: DirectedGraph<char, u32> = DirectedGraph::from_edges([('a', 'b', 1), ('c', 'd', 1)]);
    let dijkstra = Dijkstra::new();

    assert!(dijkstra.shortest_path(&graph, 'a', 'd').unwrap().is_none());
    // edges are directed
    assert!(dijkstra.shortest_path(&graph, 'b', 'a').unwrap().is_none());

    let result = dijkstra.compute_shortest_paths(&graph, 'a').unwrap();
    assert!(result.is_reachable('b'));
    assert!(!result.is_reachable('c'));
}

#[test]
fn test_missing_source_is_an_error() {
    let graph: DirectedGraph<char, u32> = DirectedGraph::from_edges([('a', 'b', 1)]);
    let outcome = Dijkstra::new().shortest_path(&graph, 'z', 'b');
    assert!(matches!(outcome, Err(Error::SourceNotFound(_))));
}

#[test]
fn test_distance_overflow_is_an_error() {
    let graph: DirectedGraph<char, u32> = DirectedGraph::from_edges([('S', 'A', u32::MAX), ('A', 'T', 1)]);
    let outcome = Dijkstra::new().shortest_path(&graph, 'S', 'T');
    assert!(matches!(outcome, Err(Error::WeightOverflow(_))));

    // A target settled before the overflowing edge is relaxed is still found
    let path = Dijkstra::new().shortest_path(&graph, 'S', 'A').unwrap().unwrap();
    assert_eq!(path.weight(), u32::MAX);

    assert!(Path::from_graph(&graph, vec!['S', 'A', 'T']).is_none());
}

#[test]
fn test_checked_sum_bounds() {
    assert_eq!(7u32.checked_sum(3), Some(10));
    assert_eq!(u32::MAX.checked_sum(1), None);
    assert_eq!((-5i32).checked_sum(-3), Some(-8));
    assert_eq!((-5i32).checked_sum(i32::MIN), None);
    assert_eq!(i32::MAX.checked_sum(i32::MIN), Some(-1));
    assert_eq!(OrderedFloat(1.5).checked_sum(OrderedFloat(2.0)), Some(OrderedFloat(3.5)));
}

#[test]
fn test_equal_distances_break_ties_by_node() {
    // B's edges are inserted first, A still wins the tie
    let graph: DirectedGraph<char, u32> =
        DirectedGraph::from_edges([('S', 'B', 1), ('B', 'T', 1), ('S', 'A', 1), ('A', 'T', 1)]);

    for _ in 0..5 {
        let path = Dijkstra::new().shortest_path(&graph, 'S', 'T').unwrap().unwrap();
        assert_eq!(path.nodes(), &['S', 'A', 'T']);
        assert_eq!(path.weight(), 2);
    }
}

#[test]
fn test_search_on_mutated_view() {
    let graph: DirectedGraph<char, u32> =
        DirectedGraph::from_edges([('S', 'A', 1), ('S', 'B', 2), ('A', 'T', 2), ('B', 'T', 1)]);
    let mut view = GraphView::new(&graph);
    view.remove_edge('S', 'A');

    let dijkstra = Dijkstra::new();
    let detour = dijkstra.shortest_path(&view, 'S', 'T').unwrap().unwrap();
    assert_eq!(detour.nodes(), &['S', 'B', 'T']);

    view.remove_node('B');
    assert!(dijkstra.shortest_path(&view, 'S', 'T').unwrap().is_none());

    view.restore().unwrap();
    let original = dijkstra.shortest_path(&view, 'S', 'T').unwrap().unwrap();
    assert_eq!(original.nodes(), &['S', 'A', 'T']);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_zero_weight_edges() {
    let graph: DirectedGraph<u32, u32> =
        DirectedGraph::from_edges([(0, 1, 0), (1, 2, 0), (0, 2, 1), (2, 0, 0)]);
    let path = Dijkstra::new().shortest_path(&graph, 0, 2).unwrap().unwrap();
    assert_eq!(path.nodes(), &[0, 1, 2]);
    assert_eq!(path.weight(), 0);
}
