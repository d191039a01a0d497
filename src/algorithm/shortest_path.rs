//! 带权最短路径算法
//!
//! Dijkstra 单源最短路径与 Floyd-Warshall 全源最短路径

use crate::graph::{VertexHandle, WeightedGraph};
use crate::types::{Weight, INFINITY};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// 全源最短距离表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTable {
    /// 顶点标识符（按插入顺序）
    ids: Vec<String>,
    /// 距离矩阵，不可达为无穷大；序列化时写为 null
    #[serde(with = "unreachable_as_null")]
    distances: Vec<Vec<Weight>>,
}

/// 距离矩阵的序列化：无穷大 <-> null
mod unreachable_as_null {
    use crate::types::{Weight, INFINITY};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(distances: &[Vec<Weight>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<Vec<Option<Weight>>> = distances
            .iter()
            .map(|row| row.iter().map(|d| d.is_finite().then_some(*d)).collect())
            .collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<Weight>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Option<Weight>>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|d| d.unwrap_or(INFINITY)).collect())
            .collect())
    }
}

impl DistanceTable {
    /// 两点间最短距离；任一标识符不存在时返回 None
    pub fn get(&self, from: &str, to: &str) -> Option<Weight> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Some(self.distances[i][j])
    }

    /// 从 from 出发到所有顶点的距离
    pub fn row(&self, from: &str) -> Option<IndexMap<String, Weight>> {
        let i = self.position(from)?;
        Some(
            self.ids
                .iter()
                .cloned()
                .zip(self.distances[i].iter().copied())
                .collect(),
        )
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}

/// 最短路径计算
pub struct ShortestPaths<'a> {
    graph: &'a WeightedGraph,
}

impl<'a> ShortestPaths<'a> {
    pub fn new(graph: &'a WeightedGraph) -> Self {
        Self { graph }
    }

    /// Dijkstra：start 到 target 的最短路径总权重
    ///
    /// 要求边权非负。不可达或端点不存在时返回 None。
    pub fn dijkstra(&self, start: &str, target: &str) -> Option<Weight> {
        let start = self.graph.handle_of(start)?;
        let target = self.graph.handle_of(target)?;

        let distances = self.run(start, Some(target));
        let distance = distances[target.as_usize()];
        distance.is_finite().then_some(distance)
    }

    /// 从 start 出发到所有可达顶点的最短距离
    pub fn distances_from(&self, start: &str) -> Option<IndexMap<String, Weight>> {
        let start = self.graph.handle_of(start)?;
        let distances = self.run(start, None);

        Some(
            distances
                .into_iter()
                .enumerate()
                .filter(|(_, distance)| distance.is_finite())
                .map(|(i, distance)| {
                    (self.graph.id_of(VertexHandle::new(i)).to_string(), distance)
                })
                .collect(),
        )
    }

    /// 优先队列版 Dijkstra，距离减小时更新队列中的优先级
    fn run(&self, start: VertexHandle, target: Option<VertexHandle>) -> Vec<Weight> {
        let n = self.graph.vertex_count();
        let mut distance = vec![INFINITY; n];
        let mut settled = vec![false; n];
        let mut frontier: PriorityQueue<VertexHandle, Reverse<OrderedFloat<Weight>>> =
            PriorityQueue::new();

        distance[start.as_usize()] = 0.0;
        frontier.push(start, Reverse(OrderedFloat(0.0)));

        while let Some((current, Reverse(OrderedFloat(current_distance)))) = frontier.pop() {
            settled[current.as_usize()] = true;
            if Some(current) == target {
                break;
            }

            for (_, neighbor, weight) in self.graph.vertex_at(current).neighbors_with_weights() {
                if settled[neighbor.as_usize()] {
                    continue;
                }
                let candidate = current_distance + weight;
                if candidate < distance[neighbor.as_usize()] {
                    distance[neighbor.as_usize()] = candidate;
                    frontier.push_increase(neighbor, Reverse(OrderedFloat(candidate)));
                }
            }
        }

        debug!(
            settled = settled.iter().filter(|&&s| s).count(),
            "dijkstra finished"
        );
        distance
    }

    /// Floyd-Warshall 全源最短路径，O(V³)
    pub fn floyd_warshall(&self) -> DistanceTable {
        let n = self.graph.vertex_count();
        let mut dist = vec![vec![INFINITY; n]; n];

        for vertex in self.graph.iter() {
            let i = vertex.handle().as_usize();
            dist[i][i] = 0.0;
            for (_, neighbor, weight) in vertex.neighbors_with_weights() {
                let j = neighbor.as_usize();
                if weight < dist[i][j] {
                    dist[i][j] = weight;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i][k];
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = d_ik + dist[k][j];
                    if candidate < dist[i][j] {
                        dist[i][j] = candidate;
                    }
                }
            }
        }

        debug!(vertices = n, "floyd-warshall finished");
        DistanceTable {
            ids: self.graph.iter().map(|v| v.id().to_string()).collect(),
            distances: dist,
        }
    }
}
