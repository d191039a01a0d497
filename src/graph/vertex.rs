//! 顶点定义
//!
//! 无权顶点与带权顶点：标识符 + 邻接表

use crate::types::Weight;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点句柄（图内部顶点数组的下标，图存活期间稳定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexHandle(pub usize);

impl VertexHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// 无权顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点句柄
    handle: VertexHandle,
    /// 顶点标识符
    id: String,
    /// 邻居标识符 -> 邻居句柄（按插入顺序）
    neighbors: IndexMap<String, VertexHandle>,
}

impl Vertex {
    /// 创建新顶点
    pub(crate) fn new(handle: VertexHandle, id: String) -> Self {
        Self {
            handle,
            id,
            neighbors: IndexMap::new(),
        }
    }

    /// 添加邻居（同一标识符重复添加时覆盖）
    pub(crate) fn add_neighbor(&mut self, id: &str, handle: VertexHandle) {
        self.neighbors.insert(id.to_string(), handle);
    }

    /// 获取顶点标识符
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 获取顶点句柄
    pub fn handle(&self) -> VertexHandle {
        self.handle
    }

    /// 邻居标识符
    pub fn neighbor_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.neighbors.keys().map(String::as_str)
    }

    /// 邻居句柄
    pub fn neighbors(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.neighbors.values().copied()
    }

    /// 按插入位置获取邻居句柄
    pub fn neighbor_at(&self, index: usize) -> Option<VertexHandle> {
        self.neighbors.get_index(index).map(|(_, &handle)| handle)
    }

    /// 邻居数量（出度）
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.neighbor_ids().collect();
        write!(f, "{} adjacent to [{}]", self.id, ids.join(", "))
    }
}

/// 带权顶点
#[derive(Debug, Clone)]
pub struct WeightedVertex {
    /// 顶点句柄
    handle: VertexHandle,
    /// 顶点标识符
    id: String,
    /// 邻居标识符 -> (邻居句柄, 边权重)
    neighbors: IndexMap<String, (VertexHandle, Weight)>,
}

impl WeightedVertex {
    /// 创建新顶点
    pub(crate) fn new(handle: VertexHandle, id: String) -> Self {
        Self {
            handle,
            id,
            neighbors: IndexMap::new(),
        }
    }

    /// 添加邻居，已存在时不做任何修改并返回 false
    pub(crate) fn add_neighbor(&mut self, id: &str, handle: VertexHandle, weight: Weight) -> bool {
        if self.neighbors.contains_key(id) {
            return false;
        }
        self.neighbors.insert(id.to_string(), (handle, weight));
        true
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handle(&self) -> VertexHandle {
        self.handle
    }

    pub fn neighbor_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.neighbors.keys().map(String::as_str)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.neighbors.values().map(|&(handle, _)| handle)
    }

    /// 邻居及边权重
    pub fn neighbors_with_weights(&self) -> impl Iterator<Item = (&str, VertexHandle, Weight)> + '_ {
        self.neighbors
            .iter()
            .map(|(id, &(handle, weight))| (id.as_str(), handle, weight))
    }

    /// 到指定邻居的边权重
    pub fn weight_to(&self, id: &str) -> Option<Weight> {
        self.neighbors.get(id).map(|&(_, weight)| weight)
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }
}

impl fmt::Display for WeightedVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .neighbors_with_weights()
            .map(|(id, _, weight)| format!("{}:{}", id, weight))
            .collect();
        write!(f, "{} adjacent to [{}]", self.id, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_neighbor_overwrite() {
        let mut v = Vertex::new(VertexHandle::new(0), "A".to_string());
        v.add_neighbor("B", VertexHandle::new(1));
        v.add_neighbor("B", VertexHandle::new(1));
        v.add_neighbor("C", VertexHandle::new(2));

        assert_eq!(v.neighbor_count(), 2);
        assert_eq!(v.neighbor_ids().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(v.to_string(), "A adjacent to [B, C]");
    }

    #[test]
    fn test_weighted_vertex_keeps_first_weight() {
        let mut v = WeightedVertex::new(VertexHandle::new(0), "A".to_string());
        assert!(v.add_neighbor("B", VertexHandle::new(1), 3.0));
        assert!(!v.add_neighbor("B", VertexHandle::new(1), 7.0));

        assert_eq!(v.neighbor_count(), 1);
        assert_eq!(v.weight_to("B"), Some(3.0));
        assert_eq!(v.weight_to("C"), None);
    }
}
