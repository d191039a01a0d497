//! 顶点索引
//!
//! 顶点按插入顺序存放在数组中，句柄即数组下标；标识符到句柄的映射用于快速查找

use crate::graph::vertex::VertexHandle;
use std::collections::HashMap;

/// 顶点索引
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    /// 顶点数组（句柄 -> 顶点）
    vertices: Vec<V>,
    /// 标识符到句柄的映射
    id_to_handle: HashMap<String, VertexHandle>,
}

impl<V> VertexIndex<V> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            id_to_handle: HashMap::new(),
        }
    }

    /// 注册顶点，标识符已存在时返回 None
    pub fn insert<F>(&mut self, id: String, make: F) -> Option<VertexHandle>
    where
        F: FnOnce(VertexHandle, String) -> V,
    {
        if self.id_to_handle.contains_key(&id) {
            return None;
        }
        let handle = VertexHandle::new(self.vertices.len());
        self.id_to_handle.insert(id.clone(), handle);
        self.vertices.push(make(handle, id));
        Some(handle)
    }

    /// 通过标识符查找句柄
    pub fn handle(&self, id: &str) -> Option<VertexHandle> {
        self.id_to_handle.get(id).copied()
    }

    /// 获取两个端点的句柄
    pub fn handles(&self, id1: &str, id2: &str) -> Option<(VertexHandle, VertexHandle)> {
        Some((self.handle(id1)?, self.handle(id2)?))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_handle.contains_key(id)
    }

    /// 通过句柄获取顶点
    ///
    /// 句柄只由本索引分配，越界属于内部错误。
    pub fn get(&self, handle: VertexHandle) -> &V {
        &self.vertices[handle.as_usize()]
    }

    pub fn get_mut(&mut self, handle: VertexHandle) -> &mut V {
        &mut self.vertices[handle.as_usize()]
    }

    /// 通过标识符获取顶点
    pub fn get_by_id(&self, id: &str) -> Option<&V> {
        self.handle(id).map(|handle| self.get(handle))
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按插入顺序遍历顶点
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl<V> Default for VertexIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
