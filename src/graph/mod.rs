//! 图核心模块
//!
//! 定义顶点、边、无权图与带权图的核心数据结构

mod edge;
mod graph;
mod index;
mod vertex;
mod weighted;

pub use edge::{Edge, WeightedEdge};
pub use graph::Graph;
pub use index::VertexIndex;
pub use vertex::{Vertex, VertexHandle, WeightedVertex};
pub use weighted::WeightedGraph;
