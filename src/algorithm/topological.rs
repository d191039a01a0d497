//! 拓扑排序
//!
//! 分层 Kahn 算法：每一层为当前入度为 0 的顶点，层内按标识符升序输出

use super::cycle::CycleDetector;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexHandle};
use tracing::debug;

/// 拓扑排序
pub struct TopologicalSort<'a> {
    graph: &'a Graph,
}

impl<'a> TopologicalSort<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算拓扑序
    ///
    /// 有环返回 `CyclicGraph`；含边的无向图不存在拓扑序，返回 `NotDirected`。
    pub fn sort(&self) -> Result<Vec<String>> {
        if CycleDetector::new(self.graph).contains_cycle() {
            return Err(Error::CyclicGraph);
        }
        if !self.graph.is_directed() && self.graph.edge_count() > 0 {
            return Err(Error::NotDirected);
        }

        let n = self.graph.vertex_count();
        let mut in_degree = vec![0usize; n];
        for vertex in self.graph.get_vertices() {
            for neighbor in vertex.neighbors() {
                in_degree[neighbor.as_usize()] += 1;
            }
        }

        let mut layer: Vec<VertexHandle> = (0..n)
            .filter(|&i| in_degree[i] == 0)
            .map(VertexHandle::new)
            .collect();
        let mut order = Vec::with_capacity(n);
        let mut layers = 0;

        while !layer.is_empty() {
            layer.sort_by(|a, b| self.graph.id_of(*a).cmp(self.graph.id_of(*b)));
            layers += 1;

            let mut next_layer = Vec::new();
            for &current in &layer {
                order.push(self.graph.id_of(current).to_string());
                for neighbor in self.graph.vertex_at(current).neighbors() {
                    in_degree[neighbor.as_usize()] -= 1;
                    if in_degree[neighbor.as_usize()] == 0 {
                        next_layer.push(neighbor);
                    }
                }
            }
            layer = next_layer;
        }

        // 无环时所有顶点都会被消去
        debug_assert_eq!(order.len(), n);
        debug!(vertices = order.len(), layers, "topological sort finished");
        Ok(order)
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

    #[test]
    fn test_topological_sort() {
        let graph = build(
            true,
            &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
            &[
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("B", "D"),
                ("C", "D"),
                ("C", "E"),
                ("E", "F"),
                ("G", "H"),
                ("G", "I"),
                ("H", "I"),
                ("H", "J"),
            ],
        );

        let order = TopologicalSort::new(&graph).sort().unwrap();
        assert_eq!(order, vec!["A", "G", "B", "H", "C", "I", "J", "D", "E", "F"]);
    }

    #[test]
    fn test_independent_vertices_ascending() {
        let mut graph = Graph::directed();
        for id in ["c", "a", "b"] {
            graph.add_vertex(id).unwrap();
        }
        assert_eq!(TopologicalSort::new(&graph).sort().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cyclic_graph_rejected() {
        let graph = build(true, &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(matches!(
            TopologicalSort::new(&graph).sort(),
            Err(Error::CyclicGraph)
        ));
    }

    #[test]
    fn test_undirected_graph_rejected() {
        let graph = build(false, &["A", "B"], &[("A", "B")]);
        assert!(matches!(
            TopologicalSort::new(&graph).sort(),
            Err(Error::NotDirected)
        ));

        let edgeless = build(false, &["B", "A"], &[]);
        assert_eq!(TopologicalSort::new(&edgeless).sort().unwrap(), vec!["A", "B"]);
    }
}
