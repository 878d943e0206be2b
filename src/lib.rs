//! Graphs - 内存中的无向图表示
//!
//! 支持：
//! - 泛型顶点/权重类型的邻接表（顶点与边的增删、度统计）
//! - 稠密矩阵，以及由邻接表导出的邻接矩阵、关联矩阵、拉普拉斯矩阵
//! - 委托给邻接表的 `Graph` 外观类型

pub mod cli;
pub mod error;
pub mod graph;
pub mod matrix;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{AdjacencyList, DegreeStats, DirectedEdge, Edge, Graph, GraphConfig, Neighbor};
pub use matrix::{AdjacencyMatrix, IncidenceMatrix, LaplacianMatrix, Matrix};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
