//! 数据导入模块
//!
//! 从文本文件构建图。文件格式：
//!
//! ```text
//! D            第一行：D 表示有向图，G 表示无向图
//! A,B,C        第二行：逗号分隔的顶点标识符
//! (A,B)        之后每行一条边；带权图为 (A,B,3.5)
//! ```

use crate::error::{Error, Result};
use crate::graph::{Graph, WeightedGraph};
use crate::types::Weight;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// 有向图标记
pub const DIRECTED_MARKER: &str = "D";
/// 无向图标记
pub const UNDIRECTED_MARKER: &str = "G";

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 解析后的边记录
#[derive(Debug, Clone, PartialEq)]
struct EdgeRecord {
    line: usize,
    from: String,
    to: String,
    weight: Option<Weight>,
}

/// 解析后的文档
#[derive(Debug, Clone)]
struct GraphDocument {
    directed: bool,
    vertices: Vec<String>,
    edges: Vec<EdgeRecord>,
}

/// 图导入器
#[derive(Debug, Default, Clone)]
pub struct GraphImporter;

impl GraphImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self
    }

    /// 从文本构建无权图；边上的权重列被忽略
    pub fn import_graph(&self, input: &str) -> Result<(Graph, ImportStats)> {
        let start = Instant::now();
        let document = parse_document(input)?;

        let mut graph = Graph::new(document.directed);
        let mut stats = ImportStats::default();

        for id in document.vertices {
            graph.add_vertex(id)?;
            stats.vertices_imported += 1;
        }
        for edge in document.edges {
            graph.add_edge(&edge.from, &edge.to)?;
            stats.edges_imported += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            directed = graph.is_directed(),
            "graph imported"
        );
        Ok((graph, stats))
    }

    /// 从文本构建带权图；每条边必须带权重
    pub fn import_weighted_graph(&self, input: &str) -> Result<(WeightedGraph, ImportStats)> {
        let start = Instant::now();
        let document = parse_document(input)?;

        let mut graph = WeightedGraph::new(document.directed);
        let mut stats = ImportStats::default();

        for id in document.vertices {
            if !graph.add_vertex(id.clone()) {
                return Err(Error::DuplicateVertex(id));
            }
            stats.vertices_imported += 1;
        }
        for edge in document.edges {
            let weight = edge.weight.ok_or_else(|| {
                Error::ParseError(format!("第 {} 行: 带权图的边缺少权重", edge.line))
            })?;
            if !graph.add_edge(&edge.from, &edge.to, weight) {
                return Err(Error::ParseError(format!(
                    "第 {} 行: 边 ({}, {}) 引用了不存在的顶点",
                    edge.line, edge.from, edge.to
                )));
            }
            stats.edges_imported += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            directed = graph.is_directed(),
            "weighted graph imported"
        );
        Ok((graph, stats))
    }

    /// 从文件导入无权图
    pub fn import_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<(Graph, ImportStats)> {
        debug!(path = %path.as_ref().display(), "reading graph file");
        let input = fs::read_to_string(path)?;
        self.import_graph(&input)
    }

    /// 从文件导入带权图
    pub fn import_weighted_graph_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(WeightedGraph, ImportStats)> {
        debug!(path = %path.as_ref().display(), "reading weighted graph file");
        let input = fs::read_to_string(path)?;
        self.import_weighted_graph(&input)
    }
}

/// 解析整个文档
fn parse_document(input: &str) -> Result<GraphDocument> {
    let mut lines = input.lines().map(str::trim);

    let directed = match lines.next() {
        Some(DIRECTED_MARKER) => true,
        Some(UNDIRECTED_MARKER) => false,
        Some(other) => {
            return Err(Error::ParseError(format!("错误的图类型标记: {:?}", other)));
        }
        None => return Err(Error::ParseError("缺少图类型标记".to_string())),
    };

    let vertices = lines
        .next()
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut edges = Vec::new();
    for (offset, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        // 前两行是标记和顶点
        edges.push(parse_edge_line(line, offset + 3)?);
    }

    Ok(GraphDocument {
        directed,
        vertices,
        edges,
    })
}

/// 解析一行边记录：(A,B) 或 (A,B,w)
fn parse_edge_line(line: &str, line_number: usize) -> Result<EdgeRecord> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            Error::ParseError(format!("第 {} 行: 边应写成 (a,b) 形式: {}", line_number, line))
        })?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => {
            let weight = weight.parse::<Weight>().map_err(|e| {
                Error::ParseError(format!("第 {} 行: 无效的权重 {:?}: {}", line_number, weight, e))
            })?;
            (*from, *to, Some(weight))
        }
        _ => {
            return Err(Error::ParseError(format!(
                "第 {} 行: 边需要 2 或 3 个字段: {}",
                line_number, line
            )));
        }
    };

    if from.is_empty() || to.is_empty() {
        return Err(Error::ParseError(format!(
            "第 {} 行: 边的端点不能为空",
            line_number
        )));
    }

    Ok(EdgeRecord {
        line: line_number,
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// 从文本解析无权图
pub fn parse_graph(input: &str) -> Result<Graph> {
    GraphImporter::new().import_graph(input).map(|(graph, _)| graph)
}

/// 从文本解析带权图
pub fn parse_weighted_graph(input: &str) -> Result<WeightedGraph> {
    GraphImporter::new()
        .import_weighted_graph(input)
        .map(|(graph, _)| graph)
}

/// 从文件读取无权图
pub fn read_graph_from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    GraphImporter::new()
        .import_graph_file(path)
        .map(|(graph, _)| graph)
}

/// 从文件读取带权图
pub fn read_weighted_graph_from_file<P: AsRef<Path>>(path: P) -> Result<WeightedGraph> {
    GraphImporter::new()
        .import_weighted_graph_file(path)
        .map(|(graph, _)| graph)
}
