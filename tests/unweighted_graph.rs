//! 无权图集成测试：通过公开 API 验证构建与算法性质

use graphkit::{parse_graph, Error, Graph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn build(directed: bool, ids: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new(directed);
    for id in ids {
        graph.add_vertex(*id).unwrap();
    }
    for (a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}

/// 随机图，顶点为 v0..v{n-1}
fn random_graph(rng: &mut StdRng, directed: bool, n: usize, m: usize) -> Graph {
    let mut graph = Graph::new(directed);
    for i in 0..n {
        graph.add_vertex(format!("v{}", i)).unwrap();
    }
    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            graph.add_edge(&format!("v{}", a), &format!("v{}", b)).unwrap();
        }
    }
    graph
}

// ==================== 构建 ====================

#[test]
fn test_vertex_count_matches_unique_inserts() {
    let mut graph = Graph::undirected();
    let mut accepted = 0;
    for id in ["A", "B", "A", "C", "B", "D"] {
        if graph.add_vertex(id).is_ok() {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 4);
    assert_eq!(graph.get_vertices().len(), 4);
}

#[test]
fn test_directed_scenario() {
    let graph = build(true, &["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);

    assert_eq!(graph.get_vertices().len(), 3);
    assert_eq!(graph.get_vertex("A").unwrap().neighbor_count(), 2);
    assert_eq!(graph.get_vertex("B").unwrap().neighbor_count(), 1);
    assert_eq!(graph.get_vertex("C").unwrap().neighbor_count(), 0);
}

// ==================== 路径 ====================

#[test]
fn test_path_graph_scenario() {
    let ids = ["A", "B", "C", "D", "E", "F"];
    let edges: Vec<(&str, &str)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
    let graph = build(false, &ids, &edges);

    assert_eq!(graph.find_vertices_n_away("A", 2).unwrap(), vec!["C"]);
    assert_eq!(graph.find_shortest_path("A", "F").unwrap().unwrap().len(), 6);
}

#[test]
fn test_medium_undirected_file() {
    let graph = parse_graph(
        "G\nA,B,C,D,E,F\n(A,B)\n(A,C)\n(B,D)\n(C,E)\n(D,F)\n(E,F)\n(B,C)\n",
    )
    .unwrap();

    assert_eq!(graph.find_shortest_path("A", "F").unwrap().unwrap().len(), 4);

    let mut one = graph.find_vertices_n_away("A", 1).unwrap();
    one.sort();
    assert_eq!(one, vec!["B", "C"]);

    let mut two = graph.find_vertices_n_away("A", 2).unwrap();
    two.sort();
    assert_eq!(two, vec!["D", "E"]);

    assert_eq!(graph.find_vertices_n_away("A", 3).unwrap(), vec!["F"]);
}

#[test]
fn test_shortest_path_is_valid_and_minimal() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, true, 12, 30);
        for target in 0..12 {
            let target = format!("v{}", target);
            let path = graph.find_shortest_path("v0", &target).unwrap();
            let layers = graph.find_vertices_n_away("v0", 0).unwrap();
            assert_eq!(layers, vec!["v0"]);

            match path {
                Some(path) => {
                    // 相邻两点之间必须有边
                    for pair in path.windows(2) {
                        assert!(graph.get_vertex(&pair[0]).unwrap().has_neighbor(&pair[1]));
                    }
                    // 路径边数等于 BFS 距离
                    let hops = path.len() - 1;
                    assert!(graph
                        .find_vertices_n_away("v0", hops)
                        .unwrap()
                        .contains(&target));
                    assert!(graph.bfs_traversal("v0").unwrap().contains(&target));
                }
                None => assert!(!graph.bfs_traversal("v0").unwrap().contains(&target)),
            }
        }
    }
}

#[test]
fn test_unknown_vertex_errors() {
    let graph = build(true, &["A"], &[]);
    assert!(matches!(graph.bfs_traversal("Z"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.find_shortest_path("A", "Z"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.find_path_dfs("Z", "A"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.find_vertices_n_away("Z", 1), Err(Error::UnknownVertex(_))));
}

// ==================== 连通性 ====================

#[test]
fn test_components_partition_every_vertex_once() {
    let mut rng = StdRng::seed_from_u64(11);
    for directed in [true, false] {
        let graph = random_graph(&mut rng, directed, 30, 20);
        let components = graph.get_connected_components();

        let mut seen = HashSet::new();
        for component in &components {
            for id in component {
                assert!(seen.insert(id.clone()), "{} appears twice", id);
            }
        }
        assert_eq!(seen.len(), graph.vertex_count());
    }
}

#[test]
fn test_components_independent_of_edge_order() {
    let ids: Vec<String> = (0..15).map(|i| format!("v{}", i)).collect();
    let mut edges: Vec<(usize, usize)> = vec![(0, 1), (1, 2), (3, 4), (5, 6), (6, 7), (7, 5), (9, 10), (12, 13)];
    let mut rng = StdRng::seed_from_u64(3);

    let mut results = Vec::new();
    for _ in 0..5 {
        edges.shuffle(&mut rng);
        let mut graph = Graph::undirected();
        for id in &ids {
            graph.add_vertex(id.clone()).unwrap();
        }
        for &(a, b) in &edges {
            graph.add_edge(&ids[a], &ids[b]).unwrap();
        }
        results.push(graph.get_connected_components());
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_even_and_odd_cycles_bipartite() {
    for len in 3..10 {
        let ids: Vec<String> = (0..len).map(|i| format!("v{}", i)).collect();
        let mut graph = Graph::undirected();
        for id in &ids {
            graph.add_vertex(id.clone()).unwrap();
        }
        for i in 0..len {
            graph.add_edge(&ids[i], &ids[(i + 1) % len]).unwrap();
        }
        assert_eq!(graph.is_bipartite(), len % 2 == 0, "cycle of length {}", len);
    }
}

// ==================== 环与拓扑序 ====================

#[test]
fn test_chain_has_no_cycle_until_back_edge() {
    let ids = ["A", "B", "C", "D", "E"];
    let edges: Vec<(&str, &str)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
    let mut graph = build(true, &ids, &edges);
    assert!(!graph.contains_cycle());
    assert_eq!(graph.topological_sort().unwrap(), ids.to_vec());

    graph.add_edge("E", "B").unwrap();
    assert!(graph.contains_cycle());
    assert!(matches!(graph.topological_sort(), Err(Error::CyclicGraph)));
}

#[test]
fn test_topological_sort_respects_edges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..30 {
        // 只从小编号指向大编号，必然无环
        let n = 15;
        let mut graph = Graph::directed();
        for i in 0..n {
            graph.add_vertex(format!("v{:02}", i)).unwrap();
        }
        for _ in 0..25 {
            let a = rng.gen_range(0..n - 1);
            let b = rng.gen_range(a + 1..n);
            graph.add_edge(&format!("v{:02}", a), &format!("v{:02}", b)).unwrap();
        }

        assert!(!graph.contains_cycle());
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.len(), n);

        let position = |id: &str| order.iter().position(|x| x == id).unwrap();
        for edge in graph.edges() {
            assert!(position(&edge.from) < position(&edge.to));
        }
    }
}

#[test]
fn test_topological_sort_fails_iff_cycle() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, true, 8, 10);
        assert_eq!(
            graph.topological_sort().is_err(),
            graph.contains_cycle()
        );
    }
}

#[test]
fn test_topological_sort_on_undirected_graphs() {
    let tree = build(false, &["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert!(!tree.contains_cycle());
    assert!(matches!(tree.topological_sort(), Err(Error::NotDirected)));

    let ring = build(false, &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(matches!(ring.topological_sort(), Err(Error::CyclicGraph)));

    let isolated = build(false, &["c", "a", "b"], &[]);
    assert_eq!(isolated.topological_sort().unwrap(), vec!["a", "b", "c"]);
}
