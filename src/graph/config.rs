//! 图配置
//!
//! 控制是否接受平行边与自环

use serde::{Deserialize, Serialize};

/// 邻接表插入策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 允许同一对顶点之间存在多条边（多重图）
    pub allow_parallel_edges: bool,
    /// 允许 `v1 == v2` 的边
    pub allow_self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            allow_parallel_edges: true,
            allow_self_loops: true,
        }
    }
}

impl GraphConfig {
    /// 简单图：拒绝平行边和自环
    pub fn simple() -> Self {
        Self {
            allow_parallel_edges: false,
            allow_self_loops: false,
        }
    }

    pub fn with_parallel_edges(mut self, allow: bool) -> Self {
        self.allow_parallel_edges = allow;
        self
    }

    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }
}
