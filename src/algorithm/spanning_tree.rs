//! 最小生成树算法
//!
//! Kruskal 与 Prim，边一律按无向处理，每对端点只取最先出现的一条

use super::union_find::UnionFind;
use crate::error::{Error, Result};
use crate::graph::{VertexHandle, WeightedEdge, WeightedGraph};
use crate::types::Weight;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// 生成树（或生成森林）结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 树边 (from, to, weight)
    pub edges: Vec<WeightedEdge>,
    /// 总权重
    pub total_weight: Weight,
}

impl SpanningTree {
    fn from_edges(edges: Vec<WeightedEdge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// 是否覆盖了 vertex_count 个顶点（边数为 |V|-1）
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 >= vertex_count
    }
}

/// 最小生成树计算
pub struct SpanningTreeFinder<'a> {
    graph: &'a WeightedGraph,
}

impl<'a> SpanningTreeFinder<'a> {
    pub fn new(graph: &'a WeightedGraph) -> Self {
        Self { graph }
    }

    /// Kruskal
    ///
    /// 边按 (权重, 起点标识符, 终点标识符) 升序排列。选满 |V|-1 条或边耗尽即停止，
    /// 非连通图得到边数少于 |V|-1 的生成森林。
    pub fn kruskal(&self) -> SpanningTree {
        let n = self.graph.vertex_count();
        let mut edges = self.graph.undirected_edges();
        edges.sort_by(|(a_from, a_to, a_weight), (b_from, b_to, b_weight)| {
            OrderedFloat(*a_weight)
                .cmp(&OrderedFloat(*b_weight))
                .then_with(|| self.graph.id_of(*a_from).cmp(self.graph.id_of(*b_from)))
                .then_with(|| self.graph.id_of(*a_to).cmp(self.graph.id_of(*b_to)))
        });

        let target = n.saturating_sub(1);
        let mut uf = UnionFind::new(n);
        let mut chosen = Vec::with_capacity(target);

        for (from, to, weight) in edges {
            if chosen.len() == target {
                break;
            }
            if uf.union(from, to) {
                chosen.push(self.edge(from, to, weight));
            }
        }

        if chosen.len() < target {
            warn!(
                edges = chosen.len(),
                components = uf.set_count(),
                "graph is disconnected, kruskal returns a spanning forest"
            );
        }

        let tree = SpanningTree::from_edges(chosen);
        debug!(edges = tree.edges.len(), total = tree.total_weight, "kruskal finished");
        tree
    }

    /// Prim
    ///
    /// 从最早插入的顶点出发，每次吸收到树距离最小的顶点。
    /// 存在无法到达的顶点时返回 `Disconnected`。
    pub fn prim(&self) -> Result<SpanningTree> {
        let n = self.graph.vertex_count();
        if n == 0 {
            return Ok(SpanningTree::from_edges(Vec::new()));
        }

        let mut adjacency: Vec<Vec<(VertexHandle, Weight)>> = vec![Vec::new(); n];
        for (from, to, weight) in self.graph.undirected_edges() {
            adjacency[from.as_usize()].push((to, weight));
            adjacency[to.as_usize()].push((from, weight));
        }

        // 每个树外顶点进入树的最便宜边 (权重, 树内端点)
        let mut cheapest: Vec<Option<(Weight, VertexHandle)>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut frontier: PriorityQueue<VertexHandle, Reverse<OrderedFloat<Weight>>> =
            PriorityQueue::new();
        let mut chosen = Vec::with_capacity(n - 1);
        let mut reached = 0;

        let root = VertexHandle::new(0);
        frontier.push(root, Reverse(OrderedFloat(0.0)));

        while let Some((current, _)) = frontier.pop() {
            in_tree[current.as_usize()] = true;
            reached += 1;
            if let Some((weight, from)) = cheapest[current.as_usize()] {
                chosen.push(self.edge(from, current, weight));
            }

            for &(neighbor, weight) in &adjacency[current.as_usize()] {
                if in_tree[neighbor.as_usize()] {
                    continue;
                }
                let better = cheapest[neighbor.as_usize()]
                    .map_or(true, |(known, _)| weight < known);
                if better {
                    cheapest[neighbor.as_usize()] = Some((weight, current));
                    frontier.push_increase(neighbor, Reverse(OrderedFloat(weight)));
                }
            }
        }

        if reached < n {
            warn!(reached, total = n, "graph is disconnected, prim cannot span it");
            return Err(Error::Disconnected { reached, total: n });
        }

        let tree = SpanningTree::from_edges(chosen);
        debug!(edges = tree.edges.len(), total = tree.total_weight, "prim finished");
        Ok(tree)
    }

    fn edge(&self, from: VertexHandle, to: VertexHandle, weight: Weight) -> WeightedEdge {
        WeightedEdge::new(self.graph.id_of(from), self.graph.id_of(to), weight)
    }
}
