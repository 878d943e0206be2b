//! 结果打印器
//!
//! 提供表格和垂直格式的邻接表、统计信息与矩阵输出

use crate::graph::DegreeStats;
use crate::matrix::Matrix;
use prettytable::{format, Row, Table};
use std::fmt::{Display, Write};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印每个顶点的邻接表
    ///
    /// `lists` 为 (顶点, 邻居序列) 对，邻居按插入顺序输出。
    pub fn print_adjacency<V: Display, N: Display>(&self, lists: &[(V, Vec<N>)]) -> String {
        if lists.is_empty() {
            return "Empty graph\n".to_string();
        }

        let rows: Vec<Vec<String>> = lists
            .iter()
            .map(|(v, neighbors)| adjacency_row(v, neighbors))
            .collect();
        match self.mode {
            PrintMode::Table => render_table(&ADJACENCY_COLUMNS, &rows),
            PrintMode::Vertical => render_records(&ADJACENCY_COLUMNS, &rows),
        }
    }

    /// 打印度统计信息
    ///
    /// 表格模式下每项占一行，垂直模式下整体作为一条记录。
    pub fn print_stats(&self, stats: &DegreeStats) -> String {
        let fields = stats_fields(stats);
        match self.mode {
            PrintMode::Table => {
                let rows: Vec<Vec<String>> = fields
                    .iter()
                    .map(|(name, value)| vec![name.to_string(), value.clone()])
                    .collect();
                render_table(&["Property", "Value"], &rows)
            }
            PrintMode::Vertical => {
                let (names, values): (Vec<&str>, Vec<String>) = fields.into_iter().unzip();
                render_records(&names, &[values])
            }
        }
    }

    /// 打印带标题的矩阵
    pub fn print_matrix<T: Display>(&self, title: &str, matrix: &Matrix<T>) -> String {
        format!(
            "{} ({}x{}):\n{}",
            title,
            matrix.rows(),
            matrix.columns(),
            matrix
        )
    }
}

const ADJACENCY_COLUMNS: [&str; 3] = ["Vertex", "Degree", "Adjacency"];

const RECORD_BANNER: &str = "***************************";

/// 一行邻接表：`v_<顶点>`、度、`( 邻居... )`
fn adjacency_row<V: Display, N: Display>(vertex: &V, neighbors: &[N]) -> Vec<String> {
    let adjacency: String = neighbors.iter().map(|n| format!("{} ", n)).collect();
    vec![
        format!("v_{}", vertex),
        neighbors.len().to_string(),
        format!("( {})", adjacency),
    ]
}

fn stats_fields(stats: &DegreeStats) -> [(&'static str, String); 5] {
    [
        ("Vertex Count", stats.vertex_count.to_string()),
        ("Edge Count", stats.edge_count.to_string()),
        ("Max Degree", stats.max_degree.to_string()),
        ("Min Degree", stats.min_degree.to_string()),
        ("Average Degree", format!("{:.2}", stats.average_degree)),
    ]
}

fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut table: Table = rows.iter().collect();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::from(columns));
    table.to_string()
}

/// 每条记录以序号横幅开头，字段名右对齐
fn render_records(columns: &[&str], rows: &[Vec<String>]) -> String {
    let width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{banner} {}. row {banner}", i + 1, banner = RECORD_BANNER);
        for (column, value) in columns.iter().zip(row) {
            let _ = writeln!(out, "{:>width$}: {}", column, value, width = width);
        }
    }
    out
}
