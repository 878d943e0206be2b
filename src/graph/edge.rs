//! 边定义
//!
//! 无向边、有向边（仅声明）以及邻接表中的邻居记录

use serde::{Deserialize, Serialize};

/// 无向边
///
/// 两个端点加一个权重，权重缺省为 `W::default()`（即"无权"）。
/// 不做任何校验，自环 `v1 == v2` 也是合法值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, W = i64> {
    pub v1: V,
    pub v2: V,
    pub weight: W,
}

impl<V, W: Default> Edge<V, W> {
    /// 创建无权边
    pub fn new(v1: V, v2: V) -> Self {
        Self {
            v1,
            v2,
            weight: W::default(),
        }
    }
}

impl<V, W> Edge<V, W> {
    /// 创建带权边
    pub fn weighted(v1: V, v2: V, weight: W) -> Self {
        Self { v1, v2, weight }
    }

    /// 交换两个端点
    pub fn reversed(self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
            weight: self.weight,
        }
    }
}

impl<V: PartialEq, W> Edge<V, W> {
    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if *vertex == self.v1 {
            Some(&self.v2)
        } else if *vertex == self.v2 {
            Some(&self.v1)
        } else {
            None
        }
    }
}

impl<V, W: Default> From<(V, V)> for Edge<V, W> {
    fn from((v1, v2): (V, V)) -> Self {
        Self::new(v1, v2)
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((v1, v2, weight): (V, V, W)) -> Self {
        Self::weighted(v1, v2, weight)
    }
}

/// 有向边
///
/// 目前图结构只处理无向边，这个类型不会被任何图操作消费。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge<V, W = i64> {
    pub source: V,
    pub target: V,
    pub weight: W,
}

impl<V, W: Default> DirectedEdge<V, W> {
    pub fn new(source: V, target: V) -> Self {
        Self {
            source,
            target,
            weight: W::default(),
        }
    }
}

impl<V, W> DirectedEdge<V, W> {
    pub fn weighted(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// 反向
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// 邻接表中的一条记录：邻居顶点及边权重
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor<V, W = i64> {
    pub vertex: V,
    pub weight: W,
}

impl<V, W> Neighbor<V, W> {
    pub fn new(vertex: V, weight: W) -> Self {
        Self { vertex, weight }
    }
}
