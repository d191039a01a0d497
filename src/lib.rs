//! GraphKit - 内存图数据结构与经典图算法
//!
//! 支持有向/无向、带权/无权图：
//! - 广度/深度优先遍历、最短路径、n 跳顶点查询
//! - 连通分量、二分图判定、环检测、拓扑排序
//! - Dijkstra、Kruskal、Prim、Floyd-Warshall
//! - 文本格式图文件导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{DistanceTable, SpanningTree};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexHandle, WeightedEdge, WeightedGraph, WeightedVertex};
pub use import::{parse_graph, parse_weighted_graph, read_graph_from_file, read_weighted_graph_from_file};
pub use types::{Weight, INFINITY};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
