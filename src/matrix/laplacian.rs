//! 拉普拉斯矩阵 `L = D - A`

use super::adjacency::AdjacencyMatrix;
use super::dense::Matrix;
use crate::graph::AdjacencyList;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaplacianMatrix {
    matrix: Matrix<i64>,
}

impl LaplacianMatrix {
    pub fn from_adjacency_list<V, W>(list: &AdjacencyList<V, W>) -> Self
    where
        V: Clone + Eq + Hash + Debug,
        W: Clone + Default,
    {
        Self::from_adjacency_matrix(&AdjacencyMatrix::from_adjacency_list(list))
    }

    /// 自环在度和对角线中相互抵消，每行之和恒为 0
    pub fn from_adjacency_matrix(adj: &AdjacencyMatrix) -> Self {
        let n = adj.vertex_count();
        let mut matrix = Matrix::new(n, n);
        for i in 0..n {
            for j in 0..n {
                let a = i64::from(adj.get(i, j).unwrap_or(0));
                matrix[(i, j)] = if i == j {
                    i64::from(adj.row_sum(i)) - a
                } else {
                    -a
                };
            }
        }
        Self { matrix }
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.rows()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i64> {
        self.matrix.get(i, j).copied()
    }

    pub fn row_sum(&self, i: usize) -> i64 {
        self.matrix.row(i).map(|r| r.iter().sum()).unwrap_or(0)
    }

    /// 对角线之和
    pub fn trace(&self) -> i64 {
        (0..self.vertex_count())
            .filter_map(|i| self.get(i, i))
            .sum()
    }

    pub fn matrix(&self) -> &Matrix<i64> {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laplacian_star() {
        let mut list: AdjacencyList = (0..4).collect();
        for leaf in 1..4 {
            list.add_unweighted_edge(0, leaf);
        }

        let lap = LaplacianMatrix::from_adjacency_list(&list);
        assert_eq!(lap.get(0, 0), Some(3));
        assert_eq!(lap.get(2, 2), Some(1));
        assert_eq!(lap.get(0, 3), Some(-1));
        assert_eq!(lap.get(1, 2), Some(0));
        assert_eq!(lap.trace(), 2 * list.edge_count() as i64);
        for i in 0..4 {
            assert_eq!(lap.row_sum(i), 0);
        }
        assert_eq!(lap.matrix().transpose(), *lap.matrix());
    }

    #[test]
    fn test_laplacian_rows_sum_to_zero_with_loops() {
        let mut list: AdjacencyList = (0..3).collect();
        list.add_unweighted_edge(0, 0);
        list.add_unweighted_edge(0, 1);
        list.add_unweighted_edge(0, 1);
        list.add_unweighted_edge(1, 2);

        let lap = LaplacianMatrix::from_adjacency_list(&list);
        assert_eq!(lap.get(0, 0), Some(2));
        assert_eq!(lap.get(0, 1), Some(-2));
        for i in 0..lap.vertex_count() {
            assert_eq!(lap.row_sum(i), 0);
        }
    }
}
