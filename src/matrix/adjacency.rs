//! 邻接矩阵
//!
//! `A[i][j]` 为下标 `i`、`j` 两顶点之间的边数；自环在对角线上计 2

use super::dense::Matrix;
use crate::graph::AdjacencyList;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    matrix: Matrix<u32>,
}

impl AdjacencyMatrix {
    /// `n` 个孤立顶点
    pub fn new(n: usize) -> Self {
        Self {
            matrix: Matrix::new(n, n),
        }
    }

    /// 按邻接表当前的稠密下标构造
    pub fn from_adjacency_list<V, W>(list: &AdjacencyList<V, W>) -> Self
    where
        V: Clone + Eq + Hash + Debug,
        W: Clone + Default,
    {
        let mut adj = Self::new(list.vertex_count());
        for (i, (_, records)) in list.iter().enumerate() {
            for n in records {
                if let Some(j) = list.index_of(&n.vertex) {
                    adj.matrix[(i, j)] += 1;
                }
            }
        }
        adj
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.rows()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.matrix.get(i, j).copied()
    }

    /// 第 `i` 行之和，即该顶点的度
    pub fn row_sum(&self, i: usize) -> u32 {
        self.matrix.row(i).map(|r| r.iter().sum()).unwrap_or(0)
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix.transpose() == self.matrix
    }

    pub fn matrix(&self) -> &Matrix<u32> {
        &self.matrix
    }
}
