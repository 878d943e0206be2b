//! 图数据结构
//!
//! 无向（可带权）图，所有操作委托给内部独占的邻接表

use super::adjacency_list::AdjacencyList;
use super::config::GraphConfig;
use super::edge::{Edge, Neighbor};
use super::stats::DegreeStats;
use crate::error::Result;
use crate::matrix::{AdjacencyMatrix, IncidenceMatrix, LaplacianMatrix};
use std::fmt::Debug;
use std::hash::Hash;

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<V = usize, W = i64> {
    adj_list: AdjacencyList<V, W>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adj_list: AdjacencyList::default(),
        }
    }
}

impl<W> Graph<usize, W>
where
    W: Clone + Default,
{
    /// 预先创建顶点 `0..n`
    ///
    /// 与逐个调用 `add_vertex` 完全等价，之后新增的顶点继续取下一个下标。
    pub fn with_vertices(n: usize) -> Self {
        Self::from_vertices(0..n)
    }
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Clone + Default,
{
    /// 创建空图
    pub fn new() -> Self {
        Self {
            adj_list: AdjacencyList::new(),
        }
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adj_list: AdjacencyList::with_config(config),
        }
    }

    pub fn from_vertices<I: IntoIterator<Item = V>>(vertices: I) -> Self {
        Self {
            adj_list: AdjacencyList::from_vertices(vertices),
        }
    }

    /// 获取邻接表引用
    pub fn adjacency_list(&self) -> &AdjacencyList<V, W> {
        &self.adj_list
    }

    pub fn config(&self) -> &GraphConfig {
        self.adj_list.config()
    }

    // ==================== 顶点操作 ====================

    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.adj_list.add_vertex(vertex)
    }

    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.adj_list.remove_vertex(vertex)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adj_list.contains_vertex(vertex)
    }

    /// 顶点当前的稠密下标，删除顶点后会前移
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adj_list.index_of(vertex)
    }

    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adj_list.vertex_at(index)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adj_list.vertices()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Neighbor<V, W>])> + '_ {
        self.adj_list.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.adj_list.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.adj_list.is_empty()
    }

    /// 清空所有顶点和边，保留配置
    pub fn clear(&mut self) {
        self.adj_list.clear()
    }

    // ==================== 边操作 ====================

    pub fn add_edge(&mut self, v1: V, v2: V, weight: W) -> bool {
        self.adj_list.add_edge(v1, v2, weight)
    }

    pub fn add_unweighted_edge(&mut self, v1: V, v2: V) -> bool {
        self.adj_list.add_unweighted_edge(v1, v2)
    }

    pub fn add_edge_from<E: Into<Edge<V, W>>>(&mut self, edge: E) -> bool {
        self.adj_list.add_edge_from(edge)
    }

    pub fn remove_edge(&mut self, v1: &V, v2: &V) -> bool {
        self.adj_list.remove_edge(v1, v2)
    }

    pub fn remove_edge_from<E: Into<Edge<V, W>>>(&mut self, edge: E) -> bool {
        self.adj_list.remove_edge_from(edge)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<V, W>> + '_ {
        self.adj_list.edges()
    }

    pub fn edges_between(&self, v1: &V, v2: &V) -> usize {
        self.adj_list.edges_between(v1, v2)
    }

    pub fn edge_count(&self) -> usize {
        self.adj_list.edge_count()
    }

    // ==================== 邻居与度查询 ====================

    pub fn neighbors(&self, vertex: &V) -> Result<&[Neighbor<V, W>]> {
        self.adj_list.neighbors(vertex)
    }

    pub fn adjacent(&self, v1: &V, v2: &V) -> bool {
        self.adj_list.adjacent(v1, v2)
    }

    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.adj_list.degree(vertex)
    }

    pub fn average_degree(&self) -> f64 {
        self.adj_list.average_degree()
    }

    pub fn max_degree(&self) -> usize {
        self.adj_list.max_degree()
    }

    pub fn min_degree(&self) -> usize {
        self.adj_list.min_degree()
    }

    pub fn degree_stats(&self) -> DegreeStats {
        self.adj_list.degree_stats()
    }

    /// [`Graph::degree_stats`] 的简写
    pub fn stats(&self) -> DegreeStats {
        self.degree_stats()
    }

    // ==================== 矩阵表示 ====================

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_adjacency_list(&self.adj_list)
    }

    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        IncidenceMatrix::from_adjacency_list(&self.adj_list)
    }

    pub fn laplacian_matrix(&self) -> LaplacianMatrix {
        LaplacianMatrix::from_adjacency_list(&self.adj_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph: Graph = Graph::new();
        for i in 0..3 {
            graph.add_vertex(i);
        }
        assert!(graph.add_edge(0, 1, 2));
        assert!(graph.add_unweighted_edge(1, 2));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.adjacent(&2, &1));
        assert_eq!(graph.degree(&1).unwrap(), 2);
        assert_eq!(graph.neighbors(&0).unwrap()[0].weight, 2);
    }

    #[test]
    fn test_with_vertices_then_add_vertex() {
        let mut graph: Graph = Graph::with_vertices(3);
        assert_eq!(graph.vertex_count(), 3);

        // 预置顶点不会被重复创建
        assert!(!graph.add_vertex(2));
        assert!(graph.add_vertex(3));
        assert_eq!(graph.adjacency_list().index_of(&3), Some(3));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_graph_string_vertices() {
        let mut graph: Graph<String, f64> = Graph::with_config(GraphConfig::simple());
        graph.add_vertex("alice".to_string());
        graph.add_vertex("bob".to_string());

        assert!(graph.add_edge("alice".to_string(), "bob".to_string(), 1.5));
        assert!(!graph.add_edge("bob".to_string(), "alice".to_string(), 2.5));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.config().allow_parallel_edges);

        assert!(graph.remove_vertex(&"bob".to_string()));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&"alice".to_string()).unwrap(), 0);
    }

    #[test]
    fn test_graph_matrices_dimensions() {
        let mut graph: Graph = Graph::with_vertices(3);
        graph.add_unweighted_edge(0, 1);
        graph.add_unweighted_edge(1, 2);

        assert_eq!(graph.adjacency_matrix().vertex_count(), 3);
        assert_eq!(graph.incidence_matrix().edge_count(), 2);
        assert_eq!(graph.laplacian_matrix().get(1, 1), Some(2));
    }

    #[test]
    fn test_graph_stats() {
        let mut graph: Graph = Graph::with_vertices(2);
        graph.add_edge_from((0usize, 1usize));
        let stats = graph.stats();
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.average_degree, 1.0);
        assert!(stats.is_regular());

        assert!(graph.remove_edge_from((1usize, 0usize)));
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.edges_between(&0, &1), 0);
    }

    #[test]
    fn test_graph_clear_and_dense_index() {
        let mut graph: Graph = Graph::with_config(GraphConfig::simple());
        for i in 0..3 {
            graph.add_vertex(i);
        }
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 2, 9);

        assert!(graph.remove_vertex(&0));
        assert_eq!(graph.index_of(&0), None);
        assert_eq!(graph.index_of(&1), Some(0));
        assert_eq!(graph.index_of(&2), Some(1));
        assert_eq!(graph.vertex_at(1), Some(&2));
        assert_eq!(graph.vertex_at(2), None);

        let rows: Vec<_> = graph.iter().map(|(v, r)| (*v, r.to_vec())).collect();
        assert_eq!(
            rows,
            vec![(1, vec![Neighbor::new(2, 9)]), (2, vec![Neighbor::new(1, 9)])]
        );
        assert_eq!(graph.degree_stats(), graph.stats());
        assert_eq!(graph.degree_stats().edge_count, 1);

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.index_of(&1), None);
        assert_eq!(graph.config(), &GraphConfig::simple());

        // 清空后下标从 0 重新分配
        graph.add_vertex(7);
        assert_eq!(graph.index_of(&7), Some(0));
    }

    /// 只实现 Clone + Default 的权重类型
    #[derive(Debug, Clone, Default)]
    struct Label(String);

    #[test]
    fn test_graph_weight_without_equality() {
        let mut graph: Graph<usize, Label> = Graph::with_vertices(3);
        graph.add_edge(0, 1, Label("road".to_string()));
        graph.add_unweighted_edge(1, 2);

        assert_eq!(graph.neighbors(&0).unwrap()[0].weight.0, "road");
        assert_eq!(graph.neighbors(&2).unwrap()[0].weight.0, "");
        assert_eq!(graph.laplacian_matrix().trace(), 4);
        assert!(graph.remove_edge(&1, &0));
        assert_eq!(graph.edge_count(), 1);
    }
}
