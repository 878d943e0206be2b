//! 图核心模块
//!
//! 定义边、邻接表和图的核心数据结构

mod adjacency_list;
mod config;
mod edge;
mod graph;
mod stats;

pub use adjacency_list::AdjacencyList;
pub use config::GraphConfig;
pub use edge::{DirectedEdge, Edge, Neighbor};
pub use graph::Graph;
pub use stats::DegreeStats;
