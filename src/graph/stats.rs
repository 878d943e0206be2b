//! 度统计快照

use serde::{Deserialize, Serialize};

/// 图的规模与度统计，可导出为 JSON
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DegreeStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    /// 空图时为 0.0
    pub average_degree: f64,
}

impl DegreeStats {
    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// 所有顶点度数相同
    pub fn is_regular(&self) -> bool {
        self.min_degree == self.max_degree
    }
}
