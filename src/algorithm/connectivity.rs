//! 连通性算法
//!
//! 弱连通分量与二分图判定，边一律按无向处理

use super::union_find::UnionFind;
use crate::graph::{Graph, VertexHandle};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// 连通性分析
pub struct Connectivity<'a> {
    graph: &'a Graph,
}

impl<'a> Connectivity<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 弱连通分量
    ///
    /// 分量按其最早插入的顶点排序，分量内顶点保持插入顺序，与加边顺序无关。
    pub fn components(&self) -> Vec<Vec<String>> {
        let mut uf = UnionFind::new(self.graph.vertex_count());
        for vertex in self.graph.get_vertices() {
            for neighbor in vertex.neighbors() {
                uf.union(vertex.handle(), neighbor);
            }
        }

        let mut slot_of_root: HashMap<VertexHandle, usize> = HashMap::new();
        let mut components: Vec<Vec<String>> = Vec::new();
        for vertex in self.graph.get_vertices() {
            let root = uf.find(vertex.handle());
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(vertex.id().to_string());
        }

        debug!(components = components.len(), "connected components computed");
        components
    }

    /// 二分图判定
    ///
    /// 对每个弱连通分量分别做 BFS 双色染色，任何相邻同色即失败。
    pub fn is_bipartite(&self) -> bool {
        let adjacency = self.graph.undirected_adjacency();
        let mut color: Vec<Option<bool>> = vec![None; adjacency.len()];

        for start in 0..adjacency.len() {
            if color[start].is_some() {
                continue;
            }

            color[start] = Some(false);
            let mut queue = VecDeque::new();
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                let current_color = color[current].unwrap_or(false);
                for neighbor in &adjacency[current] {
                    let neighbor = neighbor.as_usize();
                    match color[neighbor] {
                        None => {
                            color[neighbor] = Some(!current_color);
                            queue.push_back(neighbor);
                        }
                        Some(c) if c == current_color => {
                            debug!(
                                vertex = self.graph.id_of(VertexHandle::new(neighbor)),
                                "bipartite coloring conflict"
                            );
                            return false;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sorted(components: Vec<Vec<String>>) -> Vec<Vec<String>> {
        let mut components: Vec<Vec<String>> = components
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect();
        components.sort();
        components
    }

    #[test]
    fn test_connected_components_undirected() {
        let graph = build(
            false,
            &["A", "B", "C", "D", "E", "F", "G", "H"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("D", "E"), ("E", "F"), ("G", "H")],
        );

        let components = Connectivity::new(&graph).components();
        assert_eq!(
            components,
            vec![
                vec!["A", "B", "C"],
                vec!["D", "E", "F"],
                vec!["G", "H"],
            ]
        );
    }

    #[test]
    fn test_connected_components_directed_is_weak() {
        let graph = build(
            true,
            &["A", "B", "C", "D", "E", "F", "G", "H"],
            &[
                ("A", "B"),
                ("B", "C"),
                ("C", "A"),
                ("D", "E"),
                ("E", "F"),
                ("G", "H"),
                ("G", "F"),
            ],
        );

        let components = sorted(Connectivity::new(&graph).components());
        assert_eq!(
            components,
            vec![vec!["A", "B", "C"], vec!["D", "E", "F", "G", "H"]]
        );
    }

    #[test]
    fn test_isolated_vertices_are_components() {
        let graph = build(true, &["A", "B"], &[]);
        assert_eq!(Connectivity::new(&graph).components().len(), 2);
    }

    #[test]
    fn test_is_bipartite() {
        let star = build(true, &["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("A", "D")]);
        assert!(Connectivity::new(&star).is_bipartite());

        let square = build(
            false,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "D"), ("D", "C"), ("C", "A")],
        );
        assert!(Connectivity::new(&square).is_bipartite());
    }

    #[test]
    fn test_is_not_bipartite() {
        let graph = build(
            false,
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B"),
                ("B", "D"),
                ("D", "C"),
                ("C", "A"),
                ("C", "E"),
                ("D", "E"),
            ],
        );
        assert!(!Connectivity::new(&graph).is_bipartite());

        let directed = build(
            true,
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "D")],
        );
        assert!(!Connectivity::new(&directed).is_bipartite());
    }

    #[test]
    fn test_bipartite_checks_every_component() {
        // 第一个分量是偶环，第二个分量是奇环
        let graph = build(
            false,
            &["A", "B", "X", "Y", "Z"],
            &[("A", "B"), ("X", "Y"), ("Y", "Z"), ("Z", "X")],
        );
        assert!(!Connectivity::new(&graph).is_bipartite());
    }
}
