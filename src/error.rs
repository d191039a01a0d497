//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("图中存在环，无法进行拓扑排序")]
    CyclicGraph,

    #[error("无向图不存在拓扑序")]
    NotDirected,

    #[error("图不连通: {reached}/{total} 个顶点可达")]
    Disconnected { reached: usize, total: usize },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
