//! 带权图
//!
//! 带权顶点的构建、查询以及最短路径、最小生成树、全源最短路径入口

use super::edge::WeightedEdge;
use super::index::VertexIndex;
use super::vertex::{VertexHandle, WeightedVertex};
use crate::algorithm::{DistanceTable, ShortestPaths, SpanningTree, SpanningTreeFinder};
use crate::error::Result;
use crate::types::Weight;
use std::collections::HashSet;
use std::fmt;

/// 带权图
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertices: VertexIndex<WeightedVertex>,
    directed: bool,
}

impl WeightedGraph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: VertexIndex::new(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，标识符已存在时返回 false
    pub fn add_vertex(&mut self, id: impl Into<String>) -> bool {
        self.vertices.insert(id.into(), WeightedVertex::new).is_some()
    }

    pub fn get_vertex(&self, id: &str) -> Option<&WeightedVertex> {
        self.vertices.get_by_id(id)
    }

    pub fn get_vertices(&self) -> Vec<&WeightedVertex> {
        self.vertices.iter().collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.vertices.contains(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 按插入顺序遍历顶点
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedVertex> {
        self.vertices.iter()
    }

    // ==================== 边操作 ====================

    /// 添加带权边
    ///
    /// 任一端点不存在时返回 false；两点之间已有边时保留原权重。
    /// Dijkstra 要求权重非负，这里不做校验。
    pub fn add_edge(&mut self, id1: &str, id2: &str, weight: Weight) -> bool {
        let Some((src, dst)) = self.vertices.handles(id1, id2) else {
            return false;
        };

        self.vertices.get_mut(src).add_neighbor(id2, dst, weight);
        if !self.directed {
            self.vertices.get_mut(dst).add_neighbor(id1, src, weight);
        }
        true
    }

    /// 所有边；无向边只出现一次
    pub fn edges(&self) -> Vec<WeightedEdge> {
        let mut edges = Vec::new();
        for vertex in self.vertices.iter() {
            for (to, handle, weight) in vertex.neighbors_with_weights() {
                if self.directed || vertex.handle() <= handle {
                    edges.push(WeightedEdge::new(vertex.id(), to, weight));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub(crate) fn handle_of(&self, id: &str) -> Option<VertexHandle> {
        self.vertices.handle(id)
    }

    pub(crate) fn vertex_at(&self, handle: VertexHandle) -> &WeightedVertex {
        self.vertices.get(handle)
    }

    pub(crate) fn id_of(&self, handle: VertexHandle) -> &str {
        self.vertices.get(handle).id()
    }

    /// 忽略方向、每对端点只保留一条的边集
    ///
    /// 保留最先出现的方向与权重，遍历按顶点插入顺序进行。
    pub(crate) fn undirected_edges(&self) -> Vec<(VertexHandle, VertexHandle, Weight)> {
        let mut seen: HashSet<(VertexHandle, VertexHandle)> = HashSet::new();
        let mut edges = Vec::new();
        for vertex in self.vertices.iter() {
            let src = vertex.handle();
            for (_, dst, weight) in vertex.neighbors_with_weights() {
                let key = if src <= dst { (src, dst) } else { (dst, src) };
                if seen.insert(key) {
                    edges.push((src, dst, weight));
                }
            }
        }
        edges
    }

    // ==================== 图算法 ====================

    /// Dijkstra 最短路径总权重；不可达或端点不存在时返回 None
    pub fn find_shortest_path(&self, start: &str, target: &str) -> Option<Weight> {
        ShortestPaths::new(self).dijkstra(start, target)
    }

    /// Kruskal 最小生成树（非连通图返回生成森林）
    pub fn minimum_spanning_tree_kruskal(&self) -> SpanningTree {
        SpanningTreeFinder::new(self).kruskal()
    }

    /// Prim 最小生成树；非连通图返回 `Disconnected`
    pub fn minimum_spanning_tree_prim(&self) -> Result<SpanningTree> {
        SpanningTreeFinder::new(self).prim()
    }

    /// Floyd-Warshall 全源最短路径
    pub fn floyd_warshall(&self) -> DistanceTable {
        ShortestPaths::new(self).floyd_warshall()
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::directed()
    }
}

impl<'a> IntoIterator for &'a WeightedGraph {
    type Item = &'a WeightedVertex;
    type IntoIter = std::slice::Iter<'a, WeightedVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices.iter().map(|v| v.to_string()).collect();
        write!(f, "WeightedGraph with vertices: [{}]", vertices.join("; "))
    }
}
