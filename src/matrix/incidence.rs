//! 关联矩阵
//!
//! 行对应顶点（稠密下标），列对应 `AdjacencyList::edges()` 的输出顺序

use super::dense::Matrix;
use crate::graph::AdjacencyList;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    matrix: Matrix<u32>,
}

impl IncidenceMatrix {
    pub fn from_adjacency_list<V, W>(list: &AdjacencyList<V, W>) -> Self
    where
        V: Clone + Eq + Hash + Debug,
        W: Clone + Default,
    {
        let edges: Vec<_> = list.edges().collect();
        let mut matrix = Matrix::new(list.vertex_count(), edges.len());
        for (k, edge) in edges.iter().enumerate() {
            for endpoint in [&edge.v1, &edge.v2] {
                if let Some(i) = list.index_of(endpoint) {
                    matrix[(i, k)] += 1;
                }
            }
        }
        Self { matrix }
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.rows()
    }

    pub fn edge_count(&self) -> usize {
        self.matrix.columns()
    }

    pub fn get(&self, vertex: usize, edge: usize) -> Option<u32> {
        self.matrix.get(vertex, edge).copied()
    }

    /// 第 `edge` 列之和，恒为 2
    pub fn column_sum(&self, edge: usize) -> u32 {
        (0..self.matrix.rows())
            .filter_map(|i| self.matrix.get(i, edge))
            .sum()
    }

    pub fn matrix(&self) -> &Matrix<u32> {
        &self.matrix
    }
}
