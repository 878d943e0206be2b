//! 邻接表
//!
//! 每个顶点对应一个邻居记录序列。顶点到稠密下标的映射由 `IndexMap`
//! 维护：删除顶点时按顺序压缩存储，后续顶点的下标随之前移。
//!
//! 一条无向边 `(v1, v2)` 对应两条记录：`v1` 的序列中指向 `v2`，
//! `v2` 的序列中指向 `v1`。两条记录总是成对增删，因此
//! `edge_count * 2 == 所有序列长度之和` 恒成立。

use super::config::GraphConfig;
use super::edge::{Edge, Neighbor};
use super::stats::DegreeStats;
use crate::error::{Error, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// 无向图的邻接表表示
#[derive(Debug, Clone)]
pub struct AdjacencyList<V = usize, W = i64> {
    /// 顶点 -> 邻居记录（按插入顺序，位置即稠密下标）
    adjacency: IndexMap<V, Vec<Neighbor<V, W>>>,
    /// 无向边数
    edge_count: usize,
    config: GraphConfig,
}

impl<V, W> Default for AdjacencyList<V, W> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
            config: GraphConfig::default(),
        }
    }
}

impl<V, W> AdjacencyList<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Clone + Default,
{
    /// 创建空邻接表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建空邻接表
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 依次添加给定顶点
    pub fn from_vertices<I: IntoIterator<Item = V>>(vertices: I) -> Self {
        let mut list = Self::new();
        for v in vertices {
            list.add_vertex(v);
        }
        list
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点；已存在时不做任何修改并返回 `false`
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(e) => {
                trace!(vertex = ?e.key(), "顶点已存在, 忽略");
                false
            }
            Entry::Vacant(e) => {
                debug!(vertex = ?e.key(), index = e.index(), "添加顶点");
                e.insert(Vec::new());
                true
            }
        }
    }

    /// 删除顶点及其关联的所有边；顶点不存在时返回 `false`
    ///
    /// 之后的顶点下标会前移一位，调用方不应跨删除操作缓存下标。
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.adjacency.get_index_of(vertex) else {
            trace!(vertex = ?vertex, "删除不存在的顶点, 忽略");
            return false;
        };

        let mut purged = 0;
        for (i, records) in self.adjacency.values_mut().enumerate() {
            if i == index {
                continue;
            }
            let before = records.len();
            records.retain(|n| n.vertex != *vertex);
            purged += before - records.len();
        }

        let self_loops = self
            .adjacency
            .shift_remove_index(index)
            .map(|(_, own)| own.iter().filter(|n| n.vertex == *vertex).count() / 2)
            .unwrap_or(0);

        self.edge_count -= purged + self_loops;
        debug!(
            vertex = ?vertex,
            index,
            removed_edges = purged + self_loops,
            "删除顶点"
        );
        true
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// 顶点当前的稠密下标
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// 稠密下标对应的顶点
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(v, _)| v)
    }

    /// 按下标顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// 按下标顺序遍历 (顶点, 邻居记录)
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Neighbor<V, W>])> + '_ {
        self.adjacency.iter().map(|(v, r)| (v, r.as_slice()))
    }

    // ==================== 边操作 ====================

    /// 添加带权边
    ///
    /// 任一端点不存在、或配置拒绝该边（平行边/自环）时返回 `false`，
    /// 此时两个端点的记录均不改变。
    pub fn add_edge(&mut self, v1: V, v2: V, weight: W) -> bool {
        let (Some(i), Some(j)) = (
            self.adjacency.get_index_of(&v1),
            self.adjacency.get_index_of(&v2),
        ) else {
            trace!(v1 = ?v1, v2 = ?v2, "端点不存在, 忽略边");
            return false;
        };

        if i == j && !self.config.allow_self_loops {
            trace!(vertex = ?v1, "不允许自环, 忽略边");
            return false;
        }
        if !self.config.allow_parallel_edges && self.adjacency[i].iter().any(|n| n.vertex == v2)
        {
            trace!(v1 = ?v1, v2 = ?v2, "边已存在, 忽略平行边");
            return false;
        }

        debug!(v1 = ?v1, v2 = ?v2, "添加边");
        self.adjacency[i].push(Neighbor::new(v2, weight.clone()));
        self.adjacency[j].push(Neighbor::new(v1, weight));
        self.edge_count += 1;
        true
    }

    /// 添加无权边（权重为 `W::default()`）
    pub fn add_unweighted_edge(&mut self, v1: V, v2: V) -> bool {
        self.add_edge(v1, v2, W::default())
    }

    /// 添加一条 [`Edge`]，也接受 `(v1, v2)` / `(v1, v2, w)` 元组
    pub fn add_edge_from<E: Into<Edge<V, W>>>(&mut self, edge: E) -> bool {
        let edge = edge.into();
        self.add_edge(edge.v1, edge.v2, edge.weight)
    }

    /// 删除 `v1` 与 `v2` 之间的一条边
    ///
    /// 存在平行边时只删除最早插入的那一条。端点或边不存在时返回 `false`。
    pub fn remove_edge(&mut self, v1: &V, v2: &V) -> bool {
        let (Some(i), Some(j)) = (
            self.adjacency.get_index_of(v1),
            self.adjacency.get_index_of(v2),
        ) else {
            trace!(v1 = ?v1, v2 = ?v2, "端点不存在, 忽略删除");
            return false;
        };

        let Some(pos) = self.adjacency[i].iter().position(|n| n.vertex == *v2) else {
            trace!(v1 = ?v1, v2 = ?v2, "边不存在, 忽略删除");
            return false;
        };
        self.adjacency[i].remove(pos);

        // 自环时 i == j，这里删除的是同一序列中的第二条记录
        if let Some(pos) = self.adjacency[j].iter().position(|n| n.vertex == *v1) {
            self.adjacency[j].remove(pos);
        }

        self.edge_count -= 1;
        debug!(v1 = ?v1, v2 = ?v2, "删除边");
        true
    }

    /// 删除一条 [`Edge`]（只按端点匹配，不比较权重）
    pub fn remove_edge_from<E: Into<Edge<V, W>>>(&mut self, edge: E) -> bool {
        let edge = edge.into();
        self.remove_edge(&edge.v1, &edge.v2)
    }

    /// 每条无向边恰好输出一次
    ///
    /// 按较小下标端点的记录顺序输出，自环每两条记录输出一次。
    pub fn edges(&self) -> impl Iterator<Item = Edge<V, W>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(i, (v, records))| {
                let mut loops_seen = 0usize;
                records.iter().filter_map(move |n| {
                    let j = self.adjacency.get_index_of(&n.vertex)?;
                    let edge = || Edge::weighted(v.clone(), n.vertex.clone(), n.weight.clone());
                    match i.cmp(&j) {
                        Ordering::Less => Some(edge()),
                        Ordering::Equal => {
                            loops_seen += 1;
                            (loops_seen % 2 == 1).then(edge)
                        }
                        Ordering::Greater => None,
                    }
                })
            })
    }

    /// 两点之间的边数（多重图中可能大于 1）
    pub fn edges_between(&self, v1: &V, v2: &V) -> usize {
        let count = self
            .adjacency
            .get(v1)
            .map(|r| r.iter().filter(|n| n.vertex == *v2).count())
            .unwrap_or(0);
        if v1 == v2 {
            count / 2
        } else {
            count
        }
    }

    // ==================== 邻居与度查询 ====================

    /// 顶点的邻居记录
    pub fn neighbors(&self, vertex: &V) -> Result<&[Neighbor<V, W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// `v2` 是否出现在 `v1` 的邻居记录中；任一端点不存在时为 `false`
    pub fn adjacent(&self, v1: &V, v2: &V) -> bool {
        self.adjacency
            .get(v1)
            .map(|r| r.iter().any(|n| n.vertex == *v2))
            .unwrap_or(false)
    }

    /// 顶点的度（邻居记录数，自环计 2）
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.neighbors(vertex).map(<[_]>::len)
    }

    /// 平均度；空图返回 0.0
    pub fn average_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        let total: usize = self.adjacency.values().map(Vec::len).sum();
        total as f64 / self.adjacency.len() as f64
    }

    /// 最大度；空图返回 0
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).max().unwrap_or(0)
    }

    /// 最小度；空图返回 0
    pub fn min_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).min().unwrap_or(0)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count,
            min_degree: self.min_degree(),
            max_degree: self.max_degree(),
            average_degree: self.average_degree(),
        }
    }

    /// 清空所有顶点和边，保留配置
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
    }
}

impl<V, W> FromIterator<V> for AdjacencyList<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}
