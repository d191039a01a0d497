//! 结果打印器
//!
//! 提供表格和 JSON 两种结果输出

use crate::error::{Error, Result};
use crate::types::Weight;
use clap::ValueEnum;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 按当前格式输出结果
    ///
    /// JSON 模式序列化 value，表格模式使用 columns/rows。
    pub fn render<T: Serialize>(
        &self,
        value: &T,
        columns: &[&str],
        rows: &[Vec<String>],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .map(|json| format!("{}\n", json))
                .map_err(|e| Error::SerializationError(e.to_string())),
            OutputFormat::Table => Ok(self.format_rows(columns, rows)),
        }
    }

    /// 表格输出
    fn format_rows(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        format!("{}{} row(s) in set\n", table, rows.len())
    }

    /// 打印图统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, directed: bool) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Directed", directed.to_string()]);
        table.to_string()
    }
}

/// 权重显示，无穷大显示为 ∞
pub fn format_weight(weight: Weight) -> String {
    if weight.is_infinite() {
        "∞".to_string()
    } else {
        weight.to_string()
    }
}
