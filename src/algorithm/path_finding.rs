//! 无权图路径算法
//!
//! 广度优先遍历、最短路径、深度优先路径和 n 跳顶点查询

use crate::error::Result;
use crate::graph::{Graph, VertexHandle};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// BFS 访问顺序
    pub fn bfs_order(&self, start: &str) -> Result<Vec<String>> {
        let start = self.graph.handle_of(start)?;

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start.as_usize()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            trace!(vertex = self.graph.id_of(current), "processing vertex");
            order.push(self.graph.id_of(current).to_string());

            for neighbor in self.graph.vertex_at(current).neighbors() {
                if !visited[neighbor.as_usize()] {
                    visited[neighbor.as_usize()] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(visited = order.len(), "bfs traversal finished");
        Ok(order)
    }

    /// BFS 遍历，返回全部可达顶点
    pub fn bfs_traversal(&self, start: &str) -> Result<HashSet<String>> {
        Ok(self.bfs_order(start)?.into_iter().collect())
    }

    /// BFS 最短路径（按边数）
    ///
    /// 队列严格先进先出，每个顶点记录首次发现它的前驱。
    pub fn shortest_path(&self, start: &str, target: &str) -> Result<Option<Vec<String>>> {
        let start = self.graph.handle_of(start)?;
        let target = self.graph.handle_of(target)?;

        if start == target {
            return Ok(Some(vec![self.graph.id_of(start).to_string()]));
        }

        let mut parent: Vec<Option<VertexHandle>> = vec![None; self.graph.vertex_count()];
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut queue = VecDeque::new();

        visited[start.as_usize()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.vertex_at(current).neighbors() {
                if !visited[neighbor.as_usize()] {
                    visited[neighbor.as_usize()] = true;
                    parent[neighbor.as_usize()] = Some(current);
                    queue.push_back(neighbor);

                    if neighbor == target {
                        // 重构路径
                        return Ok(Some(self.reconstruct_path(start, target, &parent)));
                    }
                }
            }
        }

        Ok(None)
    }

    /// 迭代式 DFS 查找任意一条路径（不保证最短）
    ///
    /// 邻居按插入顺序入栈，顶点第一次出栈时记录前驱。
    pub fn dfs_path(&self, start: &str, target: &str) -> Result<Option<Vec<String>>> {
        let start = self.graph.handle_of(start)?;
        let target = self.graph.handle_of(target)?;

        let mut parent: Vec<Option<VertexHandle>> = vec![None; self.graph.vertex_count()];
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack: Vec<(VertexHandle, Option<VertexHandle>)> = vec![(start, None)];

        while let Some((current, from)) = stack.pop() {
            if visited[current.as_usize()] {
                continue;
            }
            visited[current.as_usize()] = true;
            parent[current.as_usize()] = from;

            if current == target {
                return Ok(Some(self.reconstruct_path(start, target, &parent)));
            }

            for neighbor in self.graph.vertex_at(current).neighbors() {
                if !visited[neighbor.as_usize()] {
                    stack.push((neighbor, Some(current)));
                }
            }
        }

        Ok(None)
    }

    /// 重构路径
    fn reconstruct_path(
        &self,
        start: VertexHandle,
        end: VertexHandle,
        parent: &[Option<VertexHandle>],
    ) -> Vec<String> {
        let mut path = vec![self.graph.id_of(end).to_string()];
        let mut current = end;

        while current != start {
            match parent[current.as_usize()] {
                Some(prev) => {
                    path.push(self.graph.id_of(prev).to_string());
                    current = prev;
                }
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// 与 start 的最短距离恰好为 n 的顶点
    ///
    /// 单次 BFS 分层，每个顶点只在首次发现时记录距离，即最小距离。
    pub fn vertices_n_away(&self, start: &str, n: usize) -> Result<Vec<String>> {
        let start = self.graph.handle_of(start)?;

        let mut distance: Vec<Option<usize>> = vec![None; self.graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        distance[start.as_usize()] = Some(0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let depth = distance[current.as_usize()].unwrap_or(0);
            if depth == n {
                result.push(self.graph.id_of(current).to_string());
                continue;
            }

            for neighbor in self.graph.vertex_at(current).neighbors() {
                if distance[neighbor.as_usize()].is_none() {
                    distance[neighbor.as_usize()] = Some(depth + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(result)
    }
}
