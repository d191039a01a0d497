//! 并查集
//!
//! Kruskal、连通分量和无向环检测共用的不相交集合结构

use crate::graph::VertexHandle;

/// 并查集（路径压缩 + 按秩合并）
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// 创建 n 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// 查找代表元
    pub fn find(&mut self, handle: VertexHandle) -> VertexHandle {
        let mut root = handle.as_usize();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 路径压缩
        let mut current = handle.as_usize();
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        VertexHandle::new(root)
    }

    /// 合并两个集合，已在同一集合时返回 false
    pub fn union(&mut self, a: VertexHandle, b: VertexHandle) -> bool {
        let root_a = self.find(a).as_usize();
        let root_b = self.find(b).as_usize();
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// 当前集合数量
    pub fn set_count(&self) -> usize {
        self.sets
    }
}
