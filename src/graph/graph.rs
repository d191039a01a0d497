//! 无权图
//!
//! 有向/无向图的构建、查询以及无权图算法入口

use super::edge::Edge;
use super::index::VertexIndex;
use super::vertex::{Vertex, VertexHandle};
use crate::algorithm::{Connectivity, CycleDetector, PathFinder, TopologicalSort};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;

/// 无权图
///
/// 非线程安全的值类型：并发读取可以共享 `&Graph`，修改需要独占的 `&mut Graph`。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点索引
    vertices: VertexIndex<Vertex>,
    /// 是否为有向图
    directed: bool,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: VertexIndex::new(),
            directed,
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，标识符已存在时返回 `DuplicateVertex`
    pub fn add_vertex(&mut self, id: impl Into<String>) -> Result<VertexHandle> {
        let id = id.into();
        match self.vertices.insert(id.clone(), Vertex::new) {
            Some(handle) => Ok(handle),
            None => Err(Error::DuplicateVertex(id)),
        }
    }

    /// 获取顶点
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get_by_id(id)
    }

    /// 获取所有顶点（按插入顺序）
    pub fn get_vertices(&self) -> Vec<&Vertex> {
        self.vertices.iter().collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.vertices.contains(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边；无向图同时添加反向邻接
    pub fn add_edge(&mut self, id1: &str, id2: &str) -> Result<()> {
        let src = self.handle_of(id1)?;
        let dst = self.handle_of(id2)?;

        self.vertices.get_mut(src).add_neighbor(id2, dst);
        if !self.directed {
            self.vertices.get_mut(dst).add_neighbor(id1, src);
        }
        Ok(())
    }

    /// 所有边；无向边只出现一次
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.iter().flat_map(move |vertex| {
            vertex
                .neighbors()
                .filter(move |&dst| self.directed || vertex.handle() <= dst)
                .map(move |dst| Edge::new(vertex.id(), self.vertex_at(dst).id()))
        })
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居标识符
    pub fn neighbors(&self, id: &str) -> Result<Vec<&str>> {
        let handle = self.handle_of(id)?;
        Ok(self.vertex_at(handle).neighbor_ids().collect())
    }

    pub(crate) fn handle_of(&self, id: &str) -> Result<VertexHandle> {
        self.vertices
            .handle(id)
            .ok_or_else(|| Error::UnknownVertex(id.to_string()))
    }

    pub(crate) fn vertex_at(&self, handle: VertexHandle) -> &Vertex {
        self.vertices.get(handle)
    }

    pub(crate) fn id_of(&self, handle: VertexHandle) -> &str {
        self.vertices.get(handle).id()
    }

    /// 忽略方向的邻接表（弱连通性使用）
    pub(crate) fn undirected_adjacency(&self) -> Vec<Vec<VertexHandle>> {
        let mut adjacency = vec![Vec::new(); self.vertex_count()];
        for vertex in self.vertices.iter() {
            let src = vertex.handle();
            for dst in vertex.neighbors() {
                adjacency[src.as_usize()].push(dst);
                if self.directed {
                    adjacency[dst.as_usize()].push(src);
                }
            }
        }
        adjacency
    }

    // ==================== 图算法 ====================

    /// 广度优先遍历，返回从 start 可达的全部顶点
    pub fn bfs_traversal(&self, start: &str) -> Result<HashSet<String>> {
        PathFinder::new(self).bfs_traversal(start)
    }

    /// 边数最少的路径
    pub fn find_shortest_path(&self, start: &str, target: &str) -> Result<Option<Vec<String>>> {
        PathFinder::new(self).shortest_path(start, target)
    }

    /// 深度优先查找任意一条路径
    pub fn find_path_dfs(&self, start: &str, target: &str) -> Result<Option<Vec<String>>> {
        PathFinder::new(self).dfs_path(start, target)
    }

    /// 与 start 距离恰好为 n 的顶点
    pub fn find_vertices_n_away(&self, start: &str, n: usize) -> Result<Vec<String>> {
        PathFinder::new(self).vertices_n_away(start, n)
    }

    /// 是否为二分图
    pub fn is_bipartite(&self) -> bool {
        Connectivity::new(self).is_bipartite()
    }

    /// 弱连通分量
    pub fn get_connected_components(&self) -> Vec<Vec<String>> {
        Connectivity::new(self).components()
    }

    /// 是否包含环
    pub fn contains_cycle(&self) -> bool {
        CycleDetector::new(self).contains_cycle()
    }

    /// 拓扑排序
    ///
    /// 有环返回 `CyclicGraph`；无环但含边的无向图返回 `NotDirected`，
    /// 没有边的无向图按标识符升序返回全部顶点。
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        TopologicalSort::new(self).sort()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices.iter().map(|v| v.to_string()).collect();
        write!(f, "Graph with vertices: [{}]", vertices.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(directed: bool) -> Graph {
        let mut graph = Graph::new(directed);
        for id in ["A", "B", "C"] {
            graph.add_vertex(id).unwrap();
        }
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph
    }

    #[test]
    fn test_create_directed_graph() {
        let graph = triangle(true);

        assert_eq!(graph.get_vertices().len(), 3);
        assert_eq!(graph.get_vertex("A").unwrap().neighbor_count(), 2);
        assert_eq!(graph.get_vertex("B").unwrap().neighbor_count(), 1);
        assert_eq!(graph.get_vertex("C").unwrap().neighbor_count(), 0);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_create_undirected_graph() {
        let graph = triangle(false);

        for id in ["A", "B", "C"] {
            assert_eq!(graph.get_vertex(id).unwrap().neighbor_count(), 2);
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = Graph::directed();
        graph.add_vertex("A").unwrap();

        let err = graph.add_vertex("A").unwrap_err();
        assert!(matches!(err, Error::DuplicateVertex(id) if id == "A"));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_edge_to_unknown_vertex() {
        let mut graph = Graph::directed();
        graph.add_vertex("A").unwrap();

        let err = graph.add_edge("A", "Z").unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(id) if id == "Z"));
        assert_eq!(graph.get_vertex("A").unwrap().neighbor_count(), 0);
    }

    #[test]
    fn test_directed_edge_has_no_reverse() {
        let graph = triangle(true);
        assert!(graph.get_vertex("A").unwrap().has_neighbor("B"));
        assert!(!graph.get_vertex("B").unwrap().has_neighbor("A"));
        assert_eq!(graph.neighbors("B").unwrap(), vec!["C"]);
    }

    #[test]
    fn test_missing_vertex_lookup() {
        let graph = triangle(true);
        assert!(graph.get_vertex("Z").is_none());
        assert!(!graph.contains_id("Z"));
        assert!(matches!(graph.neighbors("Z"), Err(Error::UnknownVertex(_))));
    }

    #[test]
    fn test_display() {
        let mut graph = Graph::directed();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B").unwrap();

        assert_eq!(
            graph.to_string(),
            "Graph with vertices: [A adjacent to [B]; B adjacent to []]"
        );
    }
}
