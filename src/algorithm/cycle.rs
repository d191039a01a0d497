//! 环检测
//!
//! 有向图使用三色 DFS，无向图使用并查集

use super::union_find::UnionFind;
use crate::graph::{Graph, VertexHandle};
use tracing::debug;

/// DFS 顶点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未访问
    White,
    /// 在当前递归栈上
    Gray,
    /// 已完成
    Black,
}

/// 环检测器
pub struct CycleDetector<'a> {
    graph: &'a Graph,
}

impl<'a> CycleDetector<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 是否包含环
    pub fn contains_cycle(&self) -> bool {
        let found = if self.graph.is_directed() {
            self.directed_cycle()
        } else {
            self.undirected_cycle()
        };
        debug!(directed = self.graph.is_directed(), found, "cycle check finished");
        found
    }

    /// 无向图：某条边的两个端点已经连通，说明该边闭合了一个环
    fn undirected_cycle(&self) -> bool {
        let mut uf = UnionFind::new(self.graph.vertex_count());
        for vertex in self.graph.get_vertices() {
            let src = vertex.handle();
            for dst in vertex.neighbors() {
                // 每条无向边在两端各存一份，只处理一次
                if src <= dst && !uf.union(src, dst) {
                    return true;
                }
            }
        }
        false
    }

    /// 有向图：迭代式三色 DFS，指向灰色顶点的边即回边
    fn directed_cycle(&self) -> bool {
        let n = self.graph.vertex_count();
        let mut color = vec![Color::White; n];

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }

            // (顶点, 已处理的邻居数)
            let mut stack: Vec<(VertexHandle, usize)> = vec![(VertexHandle::new(root), 0)];
            color[root] = Color::Gray;

            while let Some(frame) = stack.last_mut() {
                let current = frame.0;
                let neighbor = self.graph.vertex_at(current).neighbor_at(frame.1);
                frame.1 += 1;

                match neighbor {
                    Some(neighbor) => match color[neighbor.as_usize()] {
                        Color::Gray => {
                            debug!(
                                from = self.graph.id_of(current),
                                to = self.graph.id_of(neighbor),
                                "back edge found"
                            );
                            return true;
                        }
                        Color::White => {
                            color[neighbor.as_usize()] = Color::Gray;
                            stack.push((neighbor, 0));
                        }
                        Color::Black => {}
                    },
                    None => {
                        color[current.as_usize()] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }

        false
    }
}
