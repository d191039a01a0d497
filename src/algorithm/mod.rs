//! 图算法模块
//!
//! 无权图：遍历、路径、连通性、环检测、拓扑排序
//! 带权图：最短路径、最小生成树、全源最短路径

mod connectivity;
mod cycle;
mod path_finding;
mod shortest_path;
mod spanning_tree;
mod topological;
mod union_find;

pub use connectivity::Connectivity;
pub use cycle::CycleDetector;
pub use path_finding::PathFinder;
pub use shortest_path::{DistanceTable, ShortestPaths};
pub use spanning_tree::{SpanningTree, SpanningTreeFinder};
pub use topological::TopologicalSort;
pub use union_find::UnionFind;
