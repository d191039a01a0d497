//! GraphKit CLI 工具
//!
//! 从文本文件加载图并运行图算法

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use graphkit::cli::{format_weight, OutputFormat, Printer};
use graphkit::import::GraphImporter;
use graphkit::{Graph, WeightedGraph};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graph-cli")]
#[command(about = "GraphKit 命令行工具")]
struct Args {
    /// 图文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 按带权图加载（带权命令自动启用）
    #[arg(short, long)]
    weighted: bool,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 显示图统计信息
    Info,
    /// 广度优先遍历
    Bfs { start: String },
    /// 边数最少的路径
    Path { start: String, target: String },
    /// 深度优先路径
    DfsPath { start: String, target: String },
    /// 距离恰好为 n 的顶点
    NAway { start: String, n: usize },
    /// 弱连通分量
    Components,
    /// 二分图判定
    Bipartite,
    /// 环检测
    Cycle,
    /// 拓扑排序
    Topo,
    /// Dijkstra 最短路径权重（带权图）
    Dijkstra { start: String, target: String },
    /// Kruskal 最小生成树（带权图）
    Kruskal,
    /// Prim 最小生成树（带权图）
    Prim,
    /// Floyd-Warshall 全源最短路径（带权图）
    Floyd,
}

impl Args {
    fn loads_weighted(&self) -> bool {
        self.weighted || self.command.needs_weights()
    }
}

impl Command {
    fn needs_weights(&self) -> bool {
        matches!(
            self,
            Command::Dijkstra { .. } | Command::Kruskal | Command::Prim | Command::Floyd
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let printer = Printer::new(args.format);
    let importer = GraphImporter::new();

    let output = if args.loads_weighted() {
        let (graph, stats) = importer
            .import_weighted_graph_file(&args.input)
            .with_context(|| format!("加载带权图失败: {}", args.input.display()))?;
        tracing::info!(duration_ms = stats.duration_ms, "graph loaded");
        run_weighted(&graph, &args.command, &printer)?
    } else {
        let (graph, stats) = importer
            .import_graph_file(&args.input)
            .with_context(|| format!("加载图失败: {}", args.input.display()))?;
        tracing::info!(duration_ms = stats.duration_ms, "graph loaded");
        run_unweighted(&graph, &args.command, &printer)?
    };

    if args.format == OutputFormat::Table {
        println!("{}", format!("{:?}", args.command).bold());
    }
    print!("{}", output);
    Ok(())
}

fn single_column(values: &[String]) -> Vec<Vec<String>> {
    values.iter().map(|v| vec![v.clone()]).collect()
}

fn run_unweighted(graph: &Graph, command: &Command, printer: &Printer) -> anyhow::Result<String> {
    let output = match command {
        Command::Info => printer.print_stats(
            graph.vertex_count(),
            graph.edge_count(),
            graph.is_directed(),
        ),
        Command::Bfs { start } => {
            let mut seen: Vec<String> = graph.bfs_traversal(start)?.into_iter().collect();
            seen.sort();
            printer.render(&seen, &["vertex"], &single_column(&seen))?
        }
        Command::Path { start, target } | Command::DfsPath { start, target } => {
            let path = if matches!(command, Command::Path { .. }) {
                graph.find_shortest_path(start, target)?
            } else {
                graph.find_path_dfs(start, target)?
            };
            let rows: Vec<Vec<String>> = path
                .iter()
                .flatten()
                .enumerate()
                .map(|(step, id)| vec![step.to_string(), id.clone()])
                .collect();
            printer.render(&path, &["step", "vertex"], &rows)?
        }
        Command::NAway { start, n } => {
            let vertices = graph.find_vertices_n_away(start, *n)?;
            printer.render(&vertices, &["vertex"], &single_column(&vertices))?
        }
        Command::Components => {
            let components = graph.get_connected_components();
            let rows: Vec<Vec<String>> = components
                .iter()
                .enumerate()
                .map(|(i, c)| vec![i.to_string(), c.join(", ")])
                .collect();
            printer.render(&components, &["component", "vertices"], &rows)?
        }
        Command::Bipartite => {
            let value = graph.is_bipartite();
            printer.render(&value, &["bipartite"], &[vec![value.to_string()]])?
        }
        Command::Cycle => {
            let value = graph.contains_cycle();
            printer.render(&value, &["contains_cycle"], &[vec![value.to_string()]])?
        }
        Command::Topo => {
            let order = graph.topological_sort()?;
            let rows: Vec<Vec<String>> = order
                .iter()
                .enumerate()
                .map(|(i, id)| vec![i.to_string(), id.clone()])
                .collect();
            printer.render(&order, &["position", "vertex"], &rows)?
        }
        _ => bail!("命令 {:?} 需要带权图", command),
    };
    Ok(output)
}

fn run_weighted(
    graph: &WeightedGraph,
    command: &Command,
    printer: &Printer,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Info => printer.print_stats(
            graph.vertex_count(),
            graph.edge_count(),
            graph.is_directed(),
        ),
        Command::Dijkstra { start, target } => {
            let distance = graph.find_shortest_path(start, target);
            let shown = distance.map(format_weight).unwrap_or_else(|| "unreachable".to_string());
            printer.render(&distance, &["from", "to", "distance"], &[vec![
                start.clone(),
                target.clone(),
                shown,
            ]])?
        }
        Command::Kruskal | Command::Prim => {
            let tree = if matches!(command, Command::Kruskal) {
                graph.minimum_spanning_tree_kruskal()
            } else {
                graph.minimum_spanning_tree_prim()?
            };
            let mut rows: Vec<Vec<String>> = tree
                .edges
                .iter()
                .map(|e| vec![e.from.clone(), e.to.clone(), format_weight(e.weight)])
                .collect();
            rows.push(vec![
                "total".to_string(),
                String::new(),
                format_weight(tree.total_weight),
            ]);
            printer.render(&tree, &["from", "to", "weight"], &rows)?
        }
        Command::Floyd => {
            let table = graph.floyd_warshall();
            let mut columns = vec![""];
            columns.extend(table.ids().iter().map(String::as_str));
            let rows: Vec<Vec<String>> = table
                .ids()
                .iter()
                .map(|from| {
                    let mut row = vec![from.clone()];
                    row.extend(
                        table
                            .ids()
                            .iter()
                            .map(|to| table.get(from, to).map(format_weight).unwrap_or_default()),
                    );
                    row
                })
                .collect();
            printer.render(&table, &columns, &rows)?
        }
        _ => bail!("命令 {:?} 不支持带权图", command),
    };
    Ok(output)
}
